//! User command handlers.

use std::io::IsTerminal;

use serde::Serialize;
use tabled::Tabled;

use mailwatch_core::{ConnectionTest, Dashboard, NewUser, User};

use crate::cli::{AddUserArgs, GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Views ───────────────────────────────────────────────────────────

/// Serializable view of an account without its secrets.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserView<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    imap_server: &'a str,
    imap_port: u16,
    telegram_chat_id: &'a str,
    active: bool,
}

impl<'a> From<&'a User> for UserView<'a> {
    fn from(u: &'a User) -> Self {
        Self {
            id: &u.id,
            name: &u.name,
            email: &u.email,
            imap_server: &u.imap_server,
            imap_port: u.imap_port,
            telegram_chat_id: &u.telegram_chat_id,
            active: u.active,
        }
    }
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "IMAP")]
    imap: String,
    #[tabled(rename = "Telegram Chat")]
    chat: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn user_row(u: &UserView<'_>, color: bool) -> UserRow {
    UserRow {
        id: u.id.to_owned(),
        name: u.name.to_owned(),
        email: u.email.to_owned(),
        imap: format!("{}:{}", u.imap_server, u.imap_port),
        chat: u.telegram_chat_id.to_owned(),
        status: output::paint_state(active_label(u.active), u.active, color),
    }
}

fn active_label(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    dashboard: &Dashboard,
    args: UsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let users = dashboard.users();

    match args.command {
        UsersCommand::List => {
            let ok = users.load_users().await;
            util::finish(dashboard, ok, "load users", "no users to show", global)?;

            let snap = users.users();
            let views: Vec<UserView<'_>> = snap.iter().map(UserView::from).collect();
            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &views,
                |u| user_row(u, color),
                |u| u.id.to_owned(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Add(add) => {
            let email = add.email.clone();
            let new_user = build_new_user(add, global)?;
            let ok = users.add_user(new_user).await;
            if util::finish(
                dashboard,
                ok,
                "add user",
                "the account was added locally only and was not saved",
                global,
            )? {
                util::notice(&format!("User {email} added"), global);
            }
            Ok(())
        }

        UsersCommand::Toggle { id } => {
            let ok = users.toggle_user_status(&id).await;
            if util::finish(
                dashboard,
                ok,
                "toggle user status",
                "the change was applied locally only and was not saved",
                global,
            )? {
                let state = users
                    .users()
                    .iter()
                    .find(|u| u.id == id)
                    .map_or("toggled", |u| active_label(u.active));
                util::notice(&format!("User {id} is now {state}"), global);
            }
            Ok(())
        }

        UsersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete user '{id}'?"), "users delete", global.yes)? {
                return Ok(());
            }
            let ok = users.delete_user(&id).await;
            if util::finish(
                dashboard,
                ok,
                "delete user",
                "the account was removed locally only and still exists on the backend",
                global,
            )? {
                util::notice(&format!("User {id} deleted"), global);
            }
            Ok(())
        }

        UsersCommand::TestImap { id } => {
            run_connection_test(dashboard, &id, ConnectionTest::Imap, global).await
        }

        UsersCommand::TestTelegram { id } => {
            run_connection_test(dashboard, &id, ConnectionTest::Telegram, global).await
        }

        UsersCommand::CheckEmails { id } => {
            let ok = users.check_emails(&id).await;
            if util::finish(dashboard, ok, "check emails", "no mailbox was checked", global)? {
                util::notice(&format!("Mailbox check requested for {id}"), global);
            }
            Ok(())
        }
    }
}

async fn run_connection_test(
    dashboard: &Dashboard,
    id: &str,
    test: ConnectionTest,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let ok = dashboard.users().test_connection(id, test).await;
    if util::finish(
        dashboard,
        ok,
        &format!("run the {test} test"),
        "nothing was tested",
        global,
    )? {
        util::notice(&format!("{test} test passed for {id}"), global);
    }
    Ok(())
}

fn build_new_user(add: AddUserArgs, global: &GlobalOpts) -> Result<NewUser, CliError> {
    if !add.email.contains('@') {
        return Err(CliError::Validation {
            field: "email".into(),
            reason: format!("'{}' is not an email address", add.email),
        });
    }

    let password = match add.password {
        Some(p) => Some(p),
        None if !global.yes && std::io::stdin().is_terminal() => {
            let p = dialoguer::Password::new()
                .with_prompt("Mailbox password (leave empty to skip)")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            (!p.is_empty()).then_some(p)
        }
        None => None,
    };

    let mut user = NewUser::new(add.name, add.email);
    user.imap_server = add.imap_server;
    user.imap_port = add.imap_port;
    user.telegram_chat_id = add.telegram_chat_id;
    user.telegram_token = add.telegram_token;
    user.password = password;
    user.active = !add.inactive;
    Ok(user)
}
