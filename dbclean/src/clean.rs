use {
    std::io::Write,
    tracing::{info, debug, warn},
    anyhow::Result,
    taskdb_common::{
        client::ApiClient,
        entities::{Resource, Envelope, ListedItem},
        report::Report,
    },
};

#[derive(Debug, PartialEq, Eq)]
pub struct Cleanup {
    pub users: usize,
    pub tasks: usize,
}

/// Deletes every task and then every user. Tasks go first so no task is left pointing at a
/// deleted user.
pub async fn clean<W: Write>(client: &ApiClient, report: &mut Report<W>) -> Result<Cleanup> {
    report.line(format!("Connecting to {}", client.address()))?;
    report.line("WARNING: This will delete ALL users and tasks!")?;
    report.blank()?;

    client.check_health().await?;
    report.connected()?;

    report.line("Deleting all tasks...")?;
    let tasks = delete_all(client, Resource::Tasks, report).await?;
    report.done(format!("Deleted {} tasks", tasks))?;

    report.line("Deleting all users...")?;
    let users = delete_all(client, Resource::Users, report).await?;
    report.done(format!("Deleted {} users", users))?;

    report.summary(&[
        "Database cleaned!".to_owned(),
        format!("Deleted {} users and {} tasks", users, tasks),
    ])?;

    info!(users, tasks, "finished cleaning database");

    Ok(Cleanup {
        users,
        tasks,
    })
}

/// Lists every item of `resource` and deletes them one by one. Returns how many deletes the
/// service acknowledged with 200 or 204.
pub async fn delete_all<W: Write>(client: &ApiClient, resource: Resource, report: &mut Report<W>) -> Result<usize> {
    let res = client.get(resource.listing_path()).await?;
    if res.status.as_u16() != 200 {
        warn!(resource = resource.name(), status = res.status.as_u16(), api_message = res.message().as_deref(), "failed to list items");
        report.line(format!("Error getting {}: {}", resource.name(), res.status.as_u16()))?;
        return Ok(0);
    }

    let listing: Envelope<Vec<ListedItem>> = res.json()?;
    debug!(resource = resource.name(), items = listing.data.len(), "listed items");

    let mut deleted = 0;
    for id in listing.data.iter().filter_map(ListedItem::id) {
        let res = client.delete(&resource.item_path(&id)).await?;
        if res.is_deleted() {
            deleted += 1;
            report.dot()?;
        } else {
            debug!(resource = resource.name(), id = id.as_str(), status = res.status.as_u16(), api_message = res.message().as_deref(), "failed to delete item");
        }
    }

    Ok(deleted)
}
