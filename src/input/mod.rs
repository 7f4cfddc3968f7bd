mod reader;

pub use reader::{InputReader, InputSource};
