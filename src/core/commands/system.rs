//! Small local commands: `echo`, `whoami`, `date`, and the canned jokes.

use chrono::Local;

use crate::core::html;
use crate::core::settings::Settings;

use super::Builtin;

pub(super) fn computed(builtin: Builtin, settings: &Settings, args: &[String]) -> String {
    match builtin {
        Builtin::Whoami => html::escape(settings.shell_username()),
        Builtin::Date => Local::now().format("%a %b %e %Y %H:%M:%S %z").to_string(),
        _ => html::escape(&args.join(" ")),
    }
}

// Canned replies for the commands that only tell a joke.
pub(super) const LS_REPLY: &str = "a\nbunch\nof\nfake\ndirectories";
pub(super) const CD_REPLY: &str = "unfortunately, i cannot afford more directories.";
pub(super) const VI_REPLY: &str = "woah, you still use 'vi'? just try 'vim'.";
pub(super) const VIM_REPLY: &str = "'vim' is so outdated. how about 'nvim'?";
pub(super) const NVIM_REPLY: &str = "'nvim'? too fancy. why not 'emacs'?";
pub(super) const EMACS_REPLY: &str = "you know what? just use vscode.";

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn echo_joins_with_single_spaces() {
        let out = computed(Builtin::Echo, &Settings::default(), &args(&["hello", "world"]));
        assert_eq!(out, "hello world");
    }

    #[test]
    fn echo_without_args_is_empty() {
        assert_eq!(computed(Builtin::Echo, &Settings::default(), &[]), "");
    }

    #[test]
    fn echo_escapes_markup() {
        let out = computed(Builtin::Echo, &Settings::default(), &args(&["<script>"]));
        assert_eq!(out, "&lt;script&gt;");
    }

    #[test]
    fn whoami_reads_username() {
        let settings = Settings {
            shell_username: Some("visitor".into()),
            ..Default::default()
        };
        assert_eq!(computed(Builtin::Whoami, &settings, &[]), "visitor");
        assert_eq!(computed(Builtin::Whoami, &Settings::default(), &[]), "undefined");
    }

    #[test]
    fn date_contains_current_year() {
        let out = computed(Builtin::Date, &Settings::default(), &[]);
        let year = Local::now().format("%Y").to_string();
        assert!(out.contains(&year), "got {out}");
    }

    #[test]
    fn jokes_cover_the_editor_chain() {
        assert!(VI_REPLY.contains("'vim'"));
        assert!(VIM_REPLY.contains("'nvim'"));
        assert!(NVIM_REPLY.contains("'emacs'"));
        assert!(EMACS_REPLY.contains("vscode"));
    }
}
