pub mod load;
pub mod pointer;
