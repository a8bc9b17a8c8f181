pub mod cors;
pub mod guard;
pub mod usecase;
