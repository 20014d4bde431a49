mod response;

pub use response::{ResponseBody, CLIENT_FOUND_MESSAGE, CLIENT_NOT_FOUND_MESSAGE};
