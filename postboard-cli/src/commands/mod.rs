pub mod greet;
pub mod serve;
