//! Sample documents for tests.

use std::collections::BTreeMap;

/// A document to be written below a test root.
#[derive(Clone, Debug)]
pub struct DocumentFixture {
    /// Path relative to the root, including the extension.
    pub path: String,
    pub frontmatter: Option<BTreeMap<String, String>>,
    pub body: String,
}

impl DocumentFixture {
    /// A document without frontmatter.
    pub fn plain(path: &str, body: &str) -> Self {
        Self {
            path: path.to_string(),
            frontmatter: None,
            body: body.to_string(),
        }
    }

    /// An agent prompt at `agents/<name>.md` with a name and description.
    pub fn agent(name: &str) -> Self {
        Self::plain(&format!("agents/{name}.md"), &format!("# {name}\n\nYou are {name}.\n"))
            .with_field("name", name)
            .with_field("description", &format!("Test agent: {name}"))
    }

    /// A shared snippet at `shared/<name>.md`.
    pub fn snippet(name: &str, body: &str) -> Self {
        Self::plain(&format!("shared/{name}.md"), body)
    }

    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.frontmatter.get_or_insert_with(BTreeMap::new).insert(key.to_string(), value.to_string());
        self
    }

    /// Append an `@(reference)` line to the body.
    pub fn importing(mut self, reference: &str) -> Self {
        if !self.body.is_empty() && !self.body.ends_with('\n') {
            self.body.push('\n');
        }
        self.body.push_str(&format!("@({reference})\n"));
        self
    }

    /// Full file text, frontmatter first.
    pub fn render(&self) -> String {
        match &self.frontmatter {
            Some(fields) => {
                let mut out = String::from("---\n");
                for (key, value) in fields {
                    out.push_str(&format!("{key}: \"{value}\"\n"));
                }
                out.push_str("---\n");
                out.push_str(&self.body);
                out
            }
            None => self.body.clone(),
        }
    }
}
