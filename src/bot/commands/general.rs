//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    ///
    /// This command provides users with information about all available bot commands
    /// and their usage, helping them understand the bot's capabilities.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Greenroom Help**\n\
        Here is a summary of all available commands.\n\n\
        **Positions**\n\
        • `/positions` - Lists all job positions.\n\
        • `/position_info <name>` - Shows a position with requirements and trainers.\n\
        • `/create_position` / `/delete_position` - Manage positions (admin).\n\
        • `/add_requirement` / `/remove_requirement` - Edit a position's requirements (admin).\n\
        • `/set_trainer_pay` / `/set_position_role` - Update pay and role links (admin).\n\n\
        **Staff**\n\
        • `/staff_register` - Registers you as staff.\n\
        • `/staff_info [user]` - Shows a member's qualifications.\n\
        • `/hiatus <on>` - Toggles your hiatus status.\n\
        • `/qualify <user> <position>` / `/unqualify` - Manage qualifications (trainers).\n\n\
        **Venues**\n\
        • `/create_venue <name>` - Creates your venue profile.\n\
        • `/venues` / `/venue_info <name>` - Browse venue profiles.\n\
        • `/venue_manage <name>` - Opens your venue's edit panel.\n\n\
        **Services**\n\
        • `/services` / `/service_listings <name>` - Browse hireable services.\n\
        • `/service_profile <name>` - Opens your profile's edit panel.\n\n\
        **Hiring**\n\
        • `/background_check` - Starts a background check application.\n\
        • `/post_job <venue>` - Posts an opening to the job board.\n\
        • `/postings` - Lists open postings.\n\n\
        **Setup (admin)**\n\
        • `/set_role` / `/set_channel` / `/config` - Configure role and channel mappings.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
