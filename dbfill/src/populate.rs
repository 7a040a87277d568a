use {
    std::io::Write,
    tracing::{info, warn},
    anyhow::Result,
    chrono::{DateTime, Duration, Utc},
    taskdb_common::{
        client::ApiClient,
        entities::{Resource, UserStub, TaskStub, Envelope, Created},
        random::{RandomSource, choose},
        report::Report,
        vocabulary::{FIRST_NAMES, LAST_NAMES, TASK_NAMES, TASK_DESCRIPTIONS, ASSIGNED_USER_PLACEHOLDER},
    },
};

pub const COMPLETED_PROBABILITY: f64 = 0.5;
pub const ASSIGNMENT_PROBABILITY: f64 = 0.6;
pub const MAX_DEADLINE_DAYS: i64 = 60;

#[derive(Debug, PartialEq, Eq)]
pub struct Population {
    pub users: usize,
    pub tasks: usize,
}

/// Creates `users` users and then `tasks` tasks, reporting progress as it goes.
/// Tasks are only generated once every user id is known.
pub async fn populate<R: RandomSource, W: Write>(
    client: &ApiClient,
    users: usize,
    tasks: usize,
    rng: &mut R,
    report: &mut Report<W>,
) -> Result<Population> {
    report.line(format!("Connecting to {}", client.address()))?;
    report.line(format!("Creating {} users and {} tasks...", users, tasks))?;
    report.blank()?;

    client.check_health().await?;
    report.connected()?;

    report.line(format!("Creating {} users...", users))?;
    let user_ids = create_users(client, users, rng, report).await?;
    report.done(format!("Created {} users", user_ids.len()))?;

    report.line(format!("Creating {} tasks...", tasks))?;
    let created_tasks = create_tasks(client, tasks, &user_ids, rng, report).await?;
    report.done(format!("Created {} tasks", created_tasks))?;

    report.summary(&[
        "Database population complete!".to_owned(),
        format!("Total users: {}", user_ids.len()),
        format!("Total tasks: {}", created_tasks),
    ])?;

    info!(users = user_ids.len(), tasks = created_tasks, "finished populating database");

    Ok(Population {
        users: user_ids.len(),
        tasks: created_tasks,
    })
}

pub async fn create_users<R: RandomSource, W: Write>(
    client: &ApiClient,
    count: usize,
    rng: &mut R,
    report: &mut Report<W>,
) -> Result<Vec<String>> {
    let mut user_ids = Vec::with_capacity(count);

    for index in 0..count {
        let user = user_stub(rng, index);
        if let Some(id) = create_user(client, &user, report).await? {
            user_ids.push(id);
        }
        report.dot()?;
    }

    Ok(user_ids)
}

async fn create_user<W: Write>(client: &ApiClient, user: &UserStub, report: &mut Report<W>) -> Result<Option<String>> {
    let res = client.post_json(Resource::Users.collection_path(), user).await?;
    if !res.is_created() {
        warn!(status = res.status.as_u16(), api_message = res.message().as_deref(), email = user.email.as_str(), "failed to create user");
        report.failure(format!("Error creating user: {} - {}", res.status.as_u16(), res.body))?;
        return Ok(None);
    }

    let created: Envelope<Created> = res.json()?;
    Ok(created.data.id())
}

pub async fn create_tasks<R: RandomSource, W: Write>(
    client: &ApiClient,
    count: usize,
    user_ids: &[String],
    rng: &mut R,
    report: &mut Report<W>,
) -> Result<usize> {
    let mut created = 0;

    for _ in 0..count {
        let task = task_stub(rng, user_ids, Utc::now());
        let res = client.post_json(Resource::Tasks.collection_path(), &task).await?;

        if res.is_created() {
            created += 1;
            report.dot()?;
        } else {
            warn!(status = res.status.as_u16(), api_message = res.message().as_deref(), "failed to create task");
            report.failure(format!("Error creating task: {} - {}", res.status.as_u16(), res.body))?;
        }
    }

    Ok(created)
}

/// The index keeps emails unique when the same name pair comes up twice.
pub fn user_stub<R: RandomSource + ?Sized>(rng: &mut R, index: usize) -> UserStub {
    let first = FIRST_NAMES[rng.index(FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.index(LAST_NAMES.len())];

    UserStub {
        name: format!("{} {}", first, last),
        email: format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), index),
    }
}

pub fn task_stub<R: RandomSource + ?Sized>(rng: &mut R, user_ids: &[String], now: DateTime<Utc>) -> TaskStub {
    let name = TASK_NAMES[rng.index(TASK_NAMES.len())];
    let description = TASK_DESCRIPTIONS[rng.index(TASK_DESCRIPTIONS.len())];
    let deadline = now + Duration::days(rng.between(1, MAX_DEADLINE_DAYS));
    let completed = rng.chance(COMPLETED_PROBABILITY);

    let assigned_user = if !user_ids.is_empty() && rng.chance(ASSIGNMENT_PROBABILITY) {
        choose(rng, user_ids).cloned()
    } else {
        None
    };

    TaskStub {
        name: name.to_owned(),
        description: description.to_owned(),
        deadline: format_deadline(deadline),
        completed,
        assigned_user_name: assigned_user.as_ref().map(|_| ASSIGNED_USER_PLACEHOLDER.to_owned()),
        assigned_user,
    }
}

pub fn format_deadline(deadline: DateTime<Utc>) -> String {
    deadline.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
