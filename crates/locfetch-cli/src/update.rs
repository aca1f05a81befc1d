//! `update-field`: call Sitecore directly, bypassing the HTTP proxy.

use clap::Args;
use locfetch_core::FieldUpdateRequest;
use locfetch_sitecore::SitecoreClient;

#[derive(Debug, Args)]
pub(crate) struct UpdateFieldArgs {
    /// Sitecore item ID to update
    #[arg(long)]
    pub item_id: String,

    /// Name of the field on that item
    #[arg(long)]
    pub field_name: String,

    /// New value; omitted from the mutation when absent
    #[arg(long)]
    pub field_value: Option<String>,
}

/// Loads Sitecore credentials from the environment, runs the token exchange
/// and mutation, and prints the GraphQL response body.
///
/// # Errors
///
/// Returns an error if config is incomplete, the item or field name is empty,
/// or any step of the Sitecore exchange fails.
pub(crate) async fn run_update_field(args: UpdateFieldArgs) -> anyhow::Result<()> {
    let config = locfetch_core::load_app_config()?;
    let client = SitecoreClient::from_config(&config)?;

    let update = FieldUpdateRequest {
        item_id: Some(args.item_id),
        field_name: Some(args.field_name),
        field_value: args.field_value,
    }
    .validate()?;

    tracing::info!(
        item_id = %update.item_id,
        field_name = %update.field_name,
        "updating sitecore field"
    );
    let data = client.update_field(&update).await?;
    println!("{}", serde_json::to_string_pretty(&data)?);

    Ok(())
}
