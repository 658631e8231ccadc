//! obj-to-str library
//!
//! Turns the text of a Wavefront OBJ file into a list of quoted string
//! literals, one per line, so the model can be pasted straight into source.
//!
//! ```text
//! v 0 0 0        ->  "v 0 0 0\n"
//! f 1 2 3        ->  "f 1 2 3\n"
//! ```

pub mod convert;
pub mod error;
pub mod escape;

pub use convert::{
    convert_obj, convert_obj_into, convert_obj_to_memory, output_path, OUTPUT_EXT,
};
pub use error::ConvertError;
pub use escape::{escape_line, escape_lines, split_lines, unescape_records};
