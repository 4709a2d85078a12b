//! Apply a code formatter's output only to the parts of a file which were
//! edited.
//!
//! Given the edited version of a file, its fully reformatted version and an
//! earlier reference version, the formatter's changes are split into chunks
//! and only the chunks touching lines edited since the reference version are
//! taken over. Every other line stays byte-for-byte as it was.

mod chooser;
mod chunk;
mod debug_dump;
mod diff;
mod document;
mod reformat;
mod unified_diff;
mod utils;

pub use chooser::{choose_lines, reconcile_chunks};
pub use chunk::DiffChunk;
pub use debug_dump::{debug_dump, write_debug_dump};
pub use diff::{
    diff_chunks, diff_opcodes, edited_line_numbers,
    opcode::{Opcode, OpcodeTag},
};
pub use document::{
    TextDocument,
    document_error::DocumentError,
    encoding::Encoding,
    mtime::{MTIME_FORMAT, format_mtime},
    newline::Newline,
};
pub use reformat::{
    reformat_changed_lines, reformat_edited_lines, reformat_error::ReformatError,
    reformat_options::ReformatOptions,
};
pub use unified_diff::unified_diff;
pub use utils::{
    common_root::get_common_root,
    join_lines::join_lines,
    path_ancestry::{PathAncestry, get_path_ancestry},
};

#[cfg(feature = "wasm")]
pub mod wasm;
