pub mod layover;
