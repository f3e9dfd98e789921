/*
[INPUT]:  Parsed subcommands and CLI configuration
[OUTPUT]: JSON results from the Zoom API
[POS]:    Command layer - dispatch to adapter client calls
[UPDATE]: When adding new subcommands or adapter endpoints
*/

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, info};
use zoom_api_adapter::{
    AuthManager, ListMeetingsQuery, ListMeetingsType, ListRegistrantsQuery, MeetingAction,
    PageQuery, RegistrantAction, RegistrantRef, RegistrantStatus, UpdateRegistrantStatusRequest,
    ZoomClient,
};

use crate::config::CliConfig;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate configuration and sign a token without contacting the API
    Check,
    /// Scheduled and live meetings
    #[command(subcommand)]
    Meetings(MeetingsCommand),
    /// Meeting registration
    #[command(subcommand)]
    Registrants(RegistrantsCommand),
    /// In-meeting polls
    #[command(subcommand)]
    Polls(PollsCommand),
    /// Completed meeting reports
    #[command(subcommand)]
    Past(PastCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MeetingsCommand {
    List {
        /// User id or email; "me" for the account owner
        #[arg(long, default_value = "me")]
        user: String,
        #[arg(long = "type", value_enum)]
        meeting_type: Option<MeetingFilter>,
        #[command(flatten)]
        page: PageArgs,
    },
    Get { meeting_id: u64 },
    Delete { meeting_id: u64 },
    Invitation { meeting_id: u64 },
    /// End a live meeting
    End { meeting_id: u64 },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RegistrantsCommand {
    List {
        meeting_id: u64,
        #[arg(long, value_enum)]
        status: Option<RegistrantFilter>,
        #[command(flatten)]
        page: PageArgs,
    },
    Approve {
        meeting_id: u64,
        #[arg(required = true)]
        registrant_ids: Vec<String>,
    },
    Deny {
        meeting_id: u64,
        #[arg(required = true)]
        registrant_ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PollsCommand {
    List { meeting_id: u64 },
    Get { meeting_id: u64, poll_id: String },
    Delete { meeting_id: u64, poll_id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PastCommand {
    /// Completed instances of a meeting
    Instances { meeting_id: u64 },
    Participants {
        /// Instance UUID as returned by `past instances`
        meeting_uuid: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long)]
    pub page_size: Option<u32>,
    #[arg(long)]
    pub next_page_token: Option<String>,
}

impl From<PageArgs> for PageQuery {
    fn from(args: PageArgs) -> Self {
        PageQuery {
            page_size: args.page_size,
            next_page_token: args.next_page_token,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingFilter {
    Scheduled,
    Live,
    Upcoming,
}

impl From<MeetingFilter> for ListMeetingsType {
    fn from(filter: MeetingFilter) -> Self {
        match filter {
            MeetingFilter::Scheduled => ListMeetingsType::Scheduled,
            MeetingFilter::Live => ListMeetingsType::Live,
            MeetingFilter::Upcoming => ListMeetingsType::Upcoming,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrantFilter {
    Pending,
    Approved,
    Denied,
}

impl From<RegistrantFilter> for RegistrantStatus {
    fn from(filter: RegistrantFilter) -> Self {
        match filter {
            RegistrantFilter::Pending => RegistrantStatus::Pending,
            RegistrantFilter::Approved => RegistrantStatus::Approved,
            RegistrantFilter::Denied => RegistrantStatus::Denied,
        }
    }
}

/// Execute a command and return its result as JSON
pub async fn run(command: Command, config: &CliConfig) -> Result<Value> {
    debug!(?command, "dispatching command");
    match command {
        Command::Check => check(config),
        Command::Meetings(cmd) => run_meetings(&connect(config)?, cmd).await,
        Command::Registrants(cmd) => run_registrants(&connect(config)?, cmd).await,
        Command::Polls(cmd) => run_polls(&connect(config)?, cmd).await,
        Command::Past(cmd) => run_past(&connect(config)?, cmd).await,
    }
}

fn check(config: &CliConfig) -> Result<Value> {
    let api = config.api_config().context("resolve credentials")?;
    config.client_config()?;

    let auth = AuthManager::new(Arc::new(api.signer()));
    let issued = auth.ensure_token().context("sign API token")?;
    let credential = auth
        .credential()
        .context("credential not cached after signing")?;
    info!(generation = issued.generation, "configuration valid");

    Ok(json!({
        "api_key": api.api_key(),
        "base_url": api.base_url(),
        "token_expires_at": credential.expires_at.to_rfc3339(),
    }))
}

fn connect(config: &CliConfig) -> Result<ZoomClient> {
    let api = config.api_config().context("resolve credentials")?;
    let client = ZoomClient::with_config(api, config.client_config()?)
        .context("create API client")?;
    debug!(base_url = client.base_url(), "API client ready");
    Ok(client)
}

async fn run_meetings(client: &ZoomClient, cmd: MeetingsCommand) -> Result<Value> {
    match cmd {
        MeetingsCommand::List {
            user,
            meeting_type,
            page,
        } => {
            let query = ListMeetingsQuery {
                meeting_type: meeting_type.map(Into::into),
                page: page.into(),
            };
            to_json(client.list_meetings(&user, &query).await.context("list meetings")?)
        }
        MeetingsCommand::Get { meeting_id } => {
            to_json(client.get_meeting(meeting_id).await.context("get meeting")?)
        }
        MeetingsCommand::Delete { meeting_id } => {
            client
                .delete_meeting(meeting_id)
                .await
                .context("delete meeting")?;
            info!(meeting_id, "meeting deleted");
            Ok(json!({ "deleted": meeting_id }))
        }
        MeetingsCommand::Invitation { meeting_id } => to_json(
            client
                .get_meeting_invitation(meeting_id)
                .await
                .context("get meeting invitation")?,
        ),
        MeetingsCommand::End { meeting_id } => {
            client
                .update_meeting_status(meeting_id, MeetingAction::End)
                .await
                .context("end meeting")?;
            info!(meeting_id, "meeting ended");
            Ok(json!({ "ended": meeting_id }))
        }
    }
}

async fn run_registrants(client: &ZoomClient, cmd: RegistrantsCommand) -> Result<Value> {
    match cmd {
        RegistrantsCommand::List {
            meeting_id,
            status,
            page,
        } => {
            let query = ListRegistrantsQuery {
                status: status.map(Into::into),
                page: page.into(),
            };
            to_json(
                client
                    .list_meeting_registrants(meeting_id, &query)
                    .await
                    .context("list registrants")?,
            )
        }
        RegistrantsCommand::Approve {
            meeting_id,
            registrant_ids,
        } => update_registrants(client, meeting_id, RegistrantAction::Approve, registrant_ids).await,
        RegistrantsCommand::Deny {
            meeting_id,
            registrant_ids,
        } => update_registrants(client, meeting_id, RegistrantAction::Deny, registrant_ids).await,
    }
}

async fn update_registrants(
    client: &ZoomClient,
    meeting_id: u64,
    action: RegistrantAction,
    registrant_ids: Vec<String>,
) -> Result<Value> {
    let update = UpdateRegistrantStatusRequest {
        action,
        registrants: registrant_ids
            .iter()
            .map(|id| RegistrantRef {
                id: Some(id.clone()),
                email: None,
            })
            .collect(),
    };
    client
        .update_registrant_status(meeting_id, &update)
        .await
        .context("update registrant status")?;
    info!(meeting_id, ?action, count = registrant_ids.len(), "registrants updated");
    Ok(json!({ "action": action, "registrants": registrant_ids }))
}

async fn run_polls(client: &ZoomClient, cmd: PollsCommand) -> Result<Value> {
    match cmd {
        PollsCommand::List { meeting_id } => {
            to_json(client.list_meeting_polls(meeting_id).await.context("list polls")?)
        }
        PollsCommand::Get {
            meeting_id,
            poll_id,
        } => to_json(
            client
                .get_meeting_poll(meeting_id, &poll_id)
                .await
                .context("get poll")?,
        ),
        PollsCommand::Delete {
            meeting_id,
            poll_id,
        } => {
            client
                .delete_meeting_poll(meeting_id, &poll_id)
                .await
                .context("delete poll")?;
            Ok(json!({ "deleted": poll_id }))
        }
    }
}

async fn run_past(client: &ZoomClient, cmd: PastCommand) -> Result<Value> {
    match cmd {
        PastCommand::Instances { meeting_id } => to_json(
            client
                .list_past_meeting_instances(meeting_id)
                .await
                .context("list past meeting instances")?,
        ),
        PastCommand::Participants { meeting_uuid, page } => to_json(
            client
                .list_past_meeting_participants(&meeting_uuid, &page.into())
                .await
                .context("list past meeting participants")?,
        ),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("serialize response")
}
