use async_trait::async_trait;

use super::{Category, Command, CommandContext, CommandError};
use super::{help, links, manual, network, profile, system};

/// The built-in command set, one variant per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    About,
    Banner,
    Sumfetch,
    Man,
    Resume,
    Readme,
    Github,
    Linkedin,
    Email,
    Repo,
    Google,
    Duckduckgo,
    Bing,
    Reddit,
    Projects,
    Weather,
    Quote,
    Sudo,
    Date,
    Whoami,
    Echo,
    Ls,
    Cd,
    Vi,
    Vim,
    Nvim,
    Emacs,
}

impl Builtin {
    /// Every builtin, in the order `help` lists them within their category.
    pub const ALL: [Builtin; 28] = [
        Builtin::Help,
        Builtin::About,
        Builtin::Banner,
        Builtin::Sumfetch,
        Builtin::Man,
        Builtin::Resume,
        Builtin::Readme,
        Builtin::Github,
        Builtin::Linkedin,
        Builtin::Email,
        Builtin::Repo,
        Builtin::Google,
        Builtin::Duckduckgo,
        Builtin::Bing,
        Builtin::Reddit,
        Builtin::Projects,
        Builtin::Weather,
        Builtin::Quote,
        Builtin::Sudo,
        Builtin::Date,
        Builtin::Whoami,
        Builtin::Echo,
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Vi,
        Builtin::Vim,
        Builtin::Nvim,
        Builtin::Emacs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::About => "about",
            Builtin::Banner => "banner",
            Builtin::Sumfetch => "sumfetch",
            Builtin::Man => "man",
            Builtin::Resume => "resume",
            Builtin::Readme => "readme",
            Builtin::Github => "github",
            Builtin::Linkedin => "linkedin",
            Builtin::Email => "email",
            Builtin::Repo => "repo",
            Builtin::Google => "google",
            Builtin::Duckduckgo => "duckduckgo",
            Builtin::Bing => "bing",
            Builtin::Reddit => "reddit",
            Builtin::Projects => "projects",
            Builtin::Weather => "weather",
            Builtin::Quote => "quote",
            Builtin::Sudo => "sudo",
            Builtin::Date => "date",
            Builtin::Whoami => "whoami",
            Builtin::Echo => "echo",
            Builtin::Ls => "ls",
            Builtin::Cd => "cd",
            Builtin::Vi => "vi",
            Builtin::Vim => "vim",
            Builtin::Nvim => "nvim",
            Builtin::Emacs => "emacs",
        }
    }

    pub fn group(&self) -> Category {
        match self {
            Builtin::Help | Builtin::About | Builtin::Banner | Builtin::Sumfetch | Builtin::Man => {
                Category::General
            }
            Builtin::Resume | Builtin::Readme => Category::Profile,
            Builtin::Github | Builtin::Linkedin | Builtin::Email | Builtin::Repo => {
                Category::Social
            }
            Builtin::Google | Builtin::Duckduckgo | Builtin::Bing | Builtin::Reddit => {
                Category::Search
            }
            Builtin::Projects => Category::Projects,
            Builtin::Weather => Category::Weather,
            Builtin::Quote | Builtin::Sudo => Category::Fun,
            Builtin::Date | Builtin::Whoami | Builtin::Echo => Category::System,
            Builtin::Ls | Builtin::Cd => Category::FileSystem,
            Builtin::Vi | Builtin::Vim | Builtin::Nvim | Builtin::Emacs => Category::Editors,
        }
    }
}

#[async_trait]
impl Command for Builtin {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn category(&self) -> Option<Category> {
        Some(self.group())
    }

    async fn invoke(
        &self,
        ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<String, CommandError> {
        let output = match self {
            Builtin::Help => help::render(ctx.settings, ctx.registry),
            Builtin::Man => manual::man(ctx.registry, args),
            Builtin::About => profile::about(ctx.settings),
            Builtin::Banner => profile::banner(ctx.settings),
            Builtin::Sumfetch => profile::sumfetch(ctx.settings),
            Builtin::Resume
            | Builtin::Github
            | Builtin::Linkedin
            | Builtin::Email
            | Builtin::Repo
            | Builtin::Sudo => links::open(*self, ctx.settings, ctx.navigator),
            Builtin::Google | Builtin::Duckduckgo | Builtin::Bing | Builtin::Reddit => {
                links::search(*self, args, ctx.navigator)?
            }
            Builtin::Projects => network::projects(ctx.provider).await,
            Builtin::Readme => network::readme(ctx.provider).await,
            Builtin::Weather => network::weather(ctx.provider, args).await,
            Builtin::Quote => network::quote(ctx.provider).await,
            Builtin::Echo | Builtin::Whoami | Builtin::Date => {
                system::computed(*self, ctx.settings, args)
            }
            Builtin::Ls => system::LS_REPLY.to_string(),
            Builtin::Cd => system::CD_REPLY.to_string(),
            Builtin::Vi => system::VI_REPLY.to_string(),
            Builtin::Vim => system::VIM_REPLY.to_string(),
            Builtin::Nvim => system::NVIM_REPLY.to_string(),
            Builtin::Emacs => system::EMACS_REPLY.to_string(),
        };
        Ok(output)
    }
}
