//! `about`, `banner` and `sumfetch`: static text built from the profile settings.

use crate::core::html;
use crate::core::settings::Settings;

use super::help::boxed;

const BANNER_ART: &str = r"
     _          _ _  __       _ _
 ___| |__   ___| | |/ _| ___ | (_) ___
/ __| '_ \ / _ \ | | |_ / _ \| | |/ _ \
\__ \ | | |  __/ | |  _| (_) | | | (_) |
|___/_| |_|\___|_|_|_|  \___/|_|_|\___/
";

pub(super) fn about(settings: &Settings) -> String {
    format!(
        "Hi, I am {}.\nWelcome to my website!\nMore about me:\n'sumfetch' - short summary.\n'resume' - my latest resume.\n'readme' - my github readme.",
        html::escape(settings.display_name())
    )
}

pub(super) fn banner(settings: &Settings) -> String {
    format!(
        "<div class=\"ascii-art\">{art}</div>\n{name}\nType 'help' to see the list of available commands.\nType 'sumfetch' to display summary.\nType 'repo' or click {here} for the Github repository.\n",
        art = html::escape(BANNER_ART),
        name = boxed(settings.display_name()),
        here = html::link(settings.repository_url(), "here"),
    )
}

pub(super) fn sumfetch(settings: &Settings) -> String {
    let github_url = format!("https://github.com/{}", settings.github());
    let linkedin_url = format!("https://www.linkedin.com/in/{}", settings.linkedin());
    let mailto = format!("mailto:{}", settings.email());

    let rows = [
        ("ABOUT", html::escape(settings.display_name())),
        ("USER", html::escape(settings.shell_username())),
        ("RESUME", html::link(settings.resume_url(), "resume")),
        ("CONTACT", String::new()),
        ("EMAIL", html::link(&mailto, settings.email())),
        ("GITHUB", html::link(&github_url, &format!("github.com/{}", settings.github()))),
        (
            "LINKEDIN",
            html::link(&linkedin_url, &format!("linkedin.com/in/{}", settings.linkedin())),
        ),
        ("REPO", html::link(settings.repository_url(), settings.repository_url())),
    ];

    let mut out = String::from("sumfetch: summary display\n");
    out.push_str("─────────────────────────────────────────────\n");
    for (label, value) in rows {
        if value.is_empty() {
            out.push_str(&format!("\n  {label}\n"));
        } else {
            out.push_str(&format!("  {label:<10}{value}\n"));
        }
    }
    out.push_str("─────────────────────────────────────────────\n");
    out
}
