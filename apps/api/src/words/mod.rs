// Word intake and the reference dictionary.
// Everything the layout core consumes passes through `sanitize` first.

pub mod dictionary;
pub mod handlers;
pub mod request;
pub mod sanitize;

pub use dictionary::Dictionary;
pub use request::WordListRequest;
