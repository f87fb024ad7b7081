//! # Manual Index
//!
//! Reference pages for `man <command>`. Pages are stored as structured
//! sections and laid out in the classic man(1) shape on lookup:
//!
//! ```text
//! ECHO(1)                    User Commands                    ECHO(1)
//!
//! NAME
//!        echo - Display a line of text
//! SYNOPSIS / DESCRIPTION / EXAMPLES / SEE ALSO ...
//! ```
//!
//! The index is not required to cover every registered command; a missing
//! page is an ordinary, reported outcome.

use crate::core::html;

use super::Registry;

const INDENT: &str = "       ";
const HEADER_WIDTH: usize = 65;

pub struct ManualPage {
    pub name: &'static str,
    pub summary: &'static str,
    pub synopsis: &'static str,
    pub description: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub see_also: &'static [&'static str],
}

impl ManualPage {
    /// Lays the page out as preformatted text.
    pub fn render(&self) -> String {
        let tag = format!("{}(1)", self.name.to_uppercase());
        let middle = "User Commands";
        let gap = HEADER_WIDTH.saturating_sub(tag.len() * 2 + middle.len()) / 2;
        let spacer = " ".repeat(gap.max(1));

        let mut out = format!("\n{tag}{spacer}{middle}{spacer}{tag}\n\n");
        out.push_str(&format!("NAME\n{INDENT}{} - {}\n\n", self.name, self.summary));
        out.push_str(&format!("SYNOPSIS\n{INDENT}{}\n\n", self.synopsis));
        out.push_str("DESCRIPTION\n");
        for line in self.description {
            out.push_str(&format!("{INDENT}{line}\n"));
        }
        out.push_str("\nEXAMPLES\n");
        for example in self.examples {
            out.push_str(&format!("{INDENT}{example}\n"));
        }
        let see_also: Vec<String> = self.see_also.iter().map(|s| format!("{s}(1)")).collect();
        out.push_str(&format!("\nSEE ALSO\n{INDENT}{}\n", see_also.join(", ")));
        html::escape(&out)
    }
}

pub static PAGES: &[ManualPage] = &[
    ManualPage {
        name: "help",
        summary: "Display available commands and usage information",
        synopsis: "help",
        description: &[
            "Displays a categorized list of all available commands with descriptions.",
            "Commands are organized into logical groups for easy navigation.",
        ],
        examples: &["help"],
        see_also: &["man", "about", "sumfetch"],
    },
    ManualPage {
        name: "about",
        summary: "Display information about the user",
        synopsis: "about",
        description: &[
            "Displays a brief introduction and welcome message about the user.",
            "Provides links to resume, GitHub readme, and other resources.",
        ],
        examples: &["about"],
        see_also: &["sumfetch", "resume", "readme"],
    },
    ManualPage {
        name: "sumfetch",
        summary: "Display user summary and contact information",
        synopsis: "sumfetch",
        description: &[
            "Displays an ASCII art representation of the user with contact",
            "information, social links, and a brief summary.",
        ],
        examples: &["sumfetch"],
        see_also: &["about", "resume", "github", "linkedin"],
    },
    ManualPage {
        name: "resume",
        summary: "Open user's resume",
        synopsis: "resume",
        description: &["Opens the user's latest resume in a new tab."],
        examples: &["resume"],
        see_also: &["about", "sumfetch", "github"],
    },
    ManualPage {
        name: "github",
        summary: "Open GitHub profile",
        synopsis: "github",
        description: &["Opens the user's GitHub profile in a new tab."],
        examples: &["github"],
        see_also: &["linkedin", "repo", "projects"],
    },
    ManualPage {
        name: "linkedin",
        summary: "Open LinkedIn profile",
        synopsis: "linkedin",
        description: &["Opens the user's LinkedIn profile in a new tab."],
        examples: &["linkedin"],
        see_also: &["github", "email", "sumfetch"],
    },
    ManualPage {
        name: "email",
        summary: "Open email client",
        synopsis: "email",
        description: &["Opens the default email client with the user's email address."],
        examples: &["email"],
        see_also: &["github", "linkedin", "sumfetch"],
    },
    ManualPage {
        name: "repo",
        summary: "Open GitHub repository",
        synopsis: "repo",
        description: &["Opens the user's main GitHub repository in a new tab."],
        examples: &["repo"],
        see_also: &["github", "projects", "readme"],
    },
    ManualPage {
        name: "projects",
        summary: "Display GitHub projects",
        synopsis: "projects",
        description: &[
            "Fetches and displays a list of the user's GitHub repositories",
            "with links to each project.",
        ],
        examples: &["projects"],
        see_also: &["repo", "github", "readme"],
    },
    ManualPage {
        name: "readme",
        summary: "Display GitHub README",
        synopsis: "readme",
        description: &["Fetches and displays the user's GitHub README file content."],
        examples: &["readme"],
        see_also: &["about", "projects", "repo"],
    },
    ManualPage {
        name: "weather",
        summary: "Get weather information",
        synopsis: "weather [city]",
        description: &[
            "Fetches current weather information for the specified city.",
            "If no city is provided, displays usage information.",
        ],
        examples: &["weather london", "weather new york", "weather tokyo"],
        see_also: &["google", "duckduckgo"],
    },
    ManualPage {
        name: "google",
        summary: "Search Google",
        synopsis: "google [query]",
        description: &["Opens Google search with the specified query in a new tab."],
        examples: &["google rust tutorials", "google async traits"],
        see_also: &["duckduckgo", "bing", "reddit"],
    },
    ManualPage {
        name: "duckduckgo",
        summary: "Search DuckDuckGo",
        synopsis: "duckduckgo [query]",
        description: &["Opens DuckDuckGo search with the specified query in a new tab."],
        examples: &["duckduckgo privacy tools", "duckduckgo linux commands"],
        see_also: &["google", "bing", "reddit"],
    },
    ManualPage {
        name: "bing",
        summary: "Search Bing",
        synopsis: "bing [query]",
        description: &[
            "Opens Bing search with the specified query in a new tab.",
            "Includes a humorous message about using Bing.",
        ],
        examples: &["bing microsoft office", "bing windows 11"],
        see_also: &["google", "duckduckgo", "reddit"],
    },
    ManualPage {
        name: "reddit",
        summary: "Search Reddit",
        synopsis: "reddit [query]",
        description: &["Opens Reddit search with the specified query in a new tab."],
        examples: &["reddit programming tips", "reddit web development"],
        see_also: &["google", "duckduckgo", "bing"],
    },
    ManualPage {
        name: "quote",
        summary: "Display random quote",
        synopsis: "quote",
        description: &["Fetches and displays a random inspirational quote."],
        examples: &["quote"],
        see_also: &["about", "sumfetch"],
    },
    ManualPage {
        name: "date",
        summary: "Display current date and time",
        synopsis: "date",
        description: &["Displays the current date and time in a readable format."],
        examples: &["date"],
        see_also: &["whoami", "echo"],
    },
    ManualPage {
        name: "whoami",
        summary: "Display current user",
        synopsis: "whoami",
        description: &["Displays the current user name (visitor)."],
        examples: &["whoami"],
        see_also: &["date", "echo"],
    },
    ManualPage {
        name: "echo",
        summary: "Display a line of text",
        synopsis: "echo [text]",
        description: &["Displays the specified text or arguments."],
        examples: &["echo hello world", "echo \"Hello, World!\""],
        see_also: &["whoami", "date"],
    },
    ManualPage {
        name: "ls",
        summary: "List fake directories",
        synopsis: "ls",
        description: &["Displays a list of fake directories for demonstration purposes."],
        examples: &["ls"],
        see_also: &["cd"],
    },
    ManualPage {
        name: "cd",
        summary: "Change directory (not implemented)",
        synopsis: "cd",
        description: &["Returns a humorous message about not being able to afford more directories."],
        examples: &["cd"],
        see_also: &["ls"],
    },
    ManualPage {
        name: "vi",
        summary: "Text editor (not implemented)",
        synopsis: "vi",
        description: &["Returns a humorous message suggesting to use vim instead."],
        examples: &["vi"],
        see_also: &["vim", "nvim", "emacs"],
    },
    ManualPage {
        name: "vim",
        summary: "Text editor (not implemented)",
        synopsis: "vim",
        description: &["Returns a humorous message suggesting to use nvim instead."],
        examples: &["vim"],
        see_also: &["vi", "nvim", "emacs"],
    },
    ManualPage {
        name: "nvim",
        summary: "Text editor (not implemented)",
        synopsis: "nvim",
        description: &["Returns a humorous message suggesting to use emacs instead."],
        examples: &["nvim"],
        see_also: &["vi", "vim", "emacs"],
    },
    ManualPage {
        name: "emacs",
        summary: "Text editor (not implemented)",
        synopsis: "emacs",
        description: &["Returns a humorous message suggesting to use VSCode instead."],
        examples: &["emacs"],
        see_also: &["vi", "vim", "nvim"],
    },
    ManualPage {
        name: "sudo",
        summary: "Execute command as superuser (not implemented)",
        synopsis: "sudo",
        description: &["Returns a humorous message and opens a video you did not ask for."],
        examples: &["sudo"],
        see_also: &["whoami"],
    },
    ManualPage {
        name: "banner",
        summary: "Display ASCII art banner",
        synopsis: "banner",
        description: &[
            "Displays a large banner with the user's name and",
            "a link to the GitHub repository.",
        ],
        examples: &["banner"],
        see_also: &["help", "about", "sumfetch"],
    },
    ManualPage {
        name: "man",
        summary: "Display manual pages",
        synopsis: "man [command]",
        description: &[
            "Displays detailed manual pages for the specified command.",
            "Provides comprehensive information about command usage,",
            "examples, and related commands.",
        ],
        examples: &["man help", "man sumfetch", "man resume"],
        see_also: &["help", "about"],
    },
];

/// Case-insensitive page lookup.
pub fn lookup(command: &str) -> Option<&'static ManualPage> {
    let wanted = command.to_lowercase();
    PAGES.iter().find(|page| page.name == wanted)
}

fn command_list(registry: &Registry) -> String {
    registry.names().join(", ")
}

/// `man [command]`. Only the first argument is consulted.
pub(super) fn man(registry: &Registry, args: &[String]) -> String {
    let Some(command) = args.first() else {
        return format!(
            "Usage: man [command]\nExample: man help, man sumfetch, man resume\n\nAvailable commands for manual:\n{}",
            command_list(registry)
        );
    };

    match lookup(command) {
        Some(page) => page.render(),
        None => format!(
            "No manual entry for '{}'\nTry: man help\nAvailable commands: {}",
            html::escape(command),
            command_list(registry)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Builtin;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_builtin_has_a_page() {
        for builtin in Builtin::ALL {
            assert!(lookup(builtin.as_str()).is_some(), "no page for {}", builtin.as_str());
        }
        assert_eq!(PAGES.len(), Builtin::ALL.len());
    }

    #[test]
    fn see_also_targets_exist() {
        for page in PAGES {
            for target in page.see_also {
                assert!(lookup(target).is_some(), "{} refers to missing {target}", page.name);
            }
        }
    }

    #[test]
    fn page_has_all_sections() {
        let text = lookup("echo").map(ManualPage::render).unwrap_or_default();
        assert!(text.starts_with("\nECHO(1)"));
        for section in ["NAME", "SYNOPSIS", "DESCRIPTION", "EXAMPLES", "SEE ALSO"] {
            assert!(text.contains(&format!("\n{section}\n")), "missing {section}");
        }
        assert!(text.contains("echo - Display a line of text"));
        assert!(text.contains("whoami(1), date(1)"));
        // Example quotes are escaped for HTML.
        assert!(text.contains("echo &quot;Hello, World!&quot;"));
    }

    #[test]
    fn man_without_args_lists_every_command() {
        let registry = Registry::builtin();
        let text = man(&registry, &[]);
        assert!(text.starts_with("Usage: man [command]"));
        for name in registry.names() {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn man_lookup_is_case_insensitive() {
        let registry = Registry::builtin();
        assert_eq!(man(&registry, &args(&["ECHO"])), man(&registry, &args(&["echo"])));
    }

    #[test]
    fn man_unknown_names_the_command() {
        let registry = Registry::builtin();
        let text = man(&registry, &args(&["unknownCmd"]));
        assert!(text.starts_with("No manual entry for 'unknownCmd'"));
        assert!(text.contains("Try: man help"));
        assert!(text.contains("whoami"));
    }

    #[test]
    fn man_escapes_unknown_target() {
        let registry = Registry::builtin();
        let text = man(&registry, &args(&["<img>"]));
        assert!(text.contains("&lt;img&gt;"));
    }

    #[test]
    fn man_ignores_extra_arguments() {
        let registry = Registry::builtin();
        assert_eq!(
            man(&registry, &args(&["echo", "ls", "cd"])),
            man(&registry, &args(&["echo"]))
        );
    }
}
