//! Built-in tool list.
//!
//! Icons come from the devicon font (https://devicon.dev/). To add a badge,
//! append a line below; position in the list is position on the page.

use super::descriptor::ToolDescriptor;
use super::loader::Catalog;

#[rustfmt::skip]
fn builtin_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new("linux").tag("linux").hint("Linux"),
        ToolDescriptor::new("raspberrypi").tag("raspberrypi").hint("Raspberry Pi"),
        ToolDescriptor::new("ubuntu").tag("ubuntu").hint("Ubuntu"),
        ToolDescriptor::new("debian").tag("debian").hint("Debian"),
        ToolDescriptor::new("docker").tag("docker").hint("Docker"),
        ToolDescriptor::new("portainer").tag("portainer").hint("Portainer").clickable(false),
        ToolDescriptor::new("kubernetes").tag("kubernetes").hint("Kubernetes").clickable(false),
        ToolDescriptor::new("cloudflare").tag("cloudflare").hint("Cloudflare"),
        ToolDescriptor::new("windows11").tag("windows11").hint("Windows11").clickable(false),
        ToolDescriptor::new("bash").tag("bash").hint("Bash").clickable(false),
        ToolDescriptor::new("yaml").tag("yaml").hint("YAML").clickable(false),
        ToolDescriptor::new("vim").tag("vim").hint("Vim").clickable(false),
        ToolDescriptor::new("ssh").tag("ssh").hint("SSH").icon_type("original-wordmark"),
        ToolDescriptor::new("ansible").tag("ansible").hint("Ansible").clickable(false),
        ToolDescriptor::new("python").tag("python").hint("Python"),
        ToolDescriptor::new("anaconda").tag("anaconda").hint("Anaconda"),
        ToolDescriptor::new("jupyter").tag("jupyter").hint("Jupyter").clickable(false),
        ToolDescriptor::new("matplotlib").tag("matplotlib").hint("Matplotlib"),
        ToolDescriptor::new("numpy").tag("numpy").hint("Numpy"),
        ToolDescriptor::new("pandas").tag("pandas").hint("Pandas"),
        ToolDescriptor::new("tensorflow").tag("tensorflow").hint("Tensorflow").clickable(false),
        ToolDescriptor::new("html5").tag("html").hint("HTML").clickable(false),
        ToolDescriptor::new("css3").tag("css").hint("CSS").clickable(false),
        ToolDescriptor::new("javascript").tag("javascript").hint("Javascript").clickable(false),
        ToolDescriptor::new("flask").tag("flask").hint("Flask").clickable(false),
        ToolDescriptor::new("react").tag("react").hint("React").clickable(false),
        ToolDescriptor::new("git").tag("git").hint("Git"),
        ToolDescriptor::new("github").tag("github").hint("Github"),
        ToolDescriptor::new("ruby").tag("ruby").hint("Ruby"),
        ToolDescriptor::new("jekyll").tag("jekyll").hint("Jekyll"),
        ToolDescriptor::new("markdown").tag("markdown").hint("Markdown"),
        ToolDescriptor::new("vscode").tag("vscode").hint("Visual Studio Code").clickable(false),
        ToolDescriptor::new("azure").tag("azure").hint("Azure").clickable(false),
        ToolDescriptor::new("googlecloud").tag("googlecloud").hint("Google Cloud").clickable(false),
    ]
}

impl Catalog {
    /// The tools shown on the about page.
    pub fn builtin() -> Self {
        Self::from_trusted(builtin_tools())
    }
}
