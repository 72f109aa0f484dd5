//! Flat string-to-string configuration in the `.properties` text format
//!
//! A [`Properties`] store holds local entries and may fall back to a shared
//! defaults store on a lookup miss. Stores are read from and written to
//! line-oriented `key=value` text, either through any `Read`/`Write` or by
//! file path.
//!
//! ```
//! use std::sync::Arc;
//! use properties::Properties;
//!
//! let defaults = Arc::new(properties::read_from("host=localhost\nport=80\n".as_bytes()).unwrap());
//! let props = Properties::with_defaults(defaults);
//! props.put("port", "8080");
//!
//! assert_eq!(props.get("host").as_deref(), Some("localhost"));
//! assert_eq!(props.get("port").as_deref(), Some("8080"));
//! ```

pub mod encoding;
pub mod error;
pub mod store;

pub use encoding::{Line, load_from_path, read_from};
pub use error::{PropertiesError, Result};
pub use store::Properties;
