//! The gh-markdown-html command-line executable.

fn main() -> anyhow::Result<()> {
    gh_markdown_html::app::run()
}
