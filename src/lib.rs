//! `gh-markdown-html` renders a Markdown manual into a standalone HTML page.
//!
//! Rendering itself is delegated to the GitHub Markdown API. The returned
//! fragment goes through a fixed list of literal patches and is wrapped in a
//! styled header and a footer before being written out.
//!
//! # Example
//!
//! ```rust
//! use gh_markdown_html::document::{assemble, FOOTER};
//!
//! let page = assemble(r#"<h2><a name="user-content-usage"></a>Usage</h2>"#, "3.15.5");
//! assert!(page.contains("<title>SPAdes 3.15.5 Manual</title>"));
//! assert!(page.contains(r#"<a name="usage">"#));
//! assert!(page.ends_with(&format!("{FOOTER}\n")));
//! ```

pub mod app;
pub mod cli;
pub mod converter;
pub mod document;
pub mod error;
pub mod patch;
pub mod version;
