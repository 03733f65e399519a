pub mod cursor;
pub mod parallax;
pub mod pointer;
pub mod scroll;
pub mod sections;
