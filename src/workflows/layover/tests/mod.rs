mod common;
mod compliance;
mod ingest;
mod sourcing;
