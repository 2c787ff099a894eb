mod link_processor;
mod utils;
pub mod document_assembler;
pub mod html_generator;
pub mod markdown_generator;
pub mod normalizer;
pub mod profile_parser;
pub mod types;
pub mod validator;

pub use document_assembler::assemble_document;
pub use html_generator::generate_html;
pub use link_processor::LinkStore;
pub use markdown_generator::generate_markdown;
pub use normalizer::{normalize_profile, normalize_url, pair_by_index, split_lines};
pub use profile_parser::parse_profile_input;
pub use types::{
    ContentBlock, DocumentError, DocumentFormat, DocumentStyle, HtmlGenerationOptions,
    NormalizedProfile, Profile, ProfileFormat, RawProfileInput,
};
pub use validator::validate_profile;
