pub mod reap;
