//! In-memory dataset served by the mock backend.

use serde_json::Value;

use crate::models::{CreateTaskInput, Task, TaskPriority, TaskStatus, UpdateTaskInput, UserProfile};

const REQUIRED_TASK_FIELDS: &[&str] = &["title", "status", "priority"];

#[derive(Debug, Clone)]
pub struct MockData {
    pub tasks: Vec<Task>,
    pub users: Vec<UserProfile>,
}

fn seed_task(
    id: &str,
    title: &str,
    description: Option<&str>,
    status: TaskStatus,
    priority: TaskPriority,
    month: u8,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        status,
        priority,
        created_at: format!("2024-{:02}-10T10:00:00Z", month),
        updated_at: format!("2024-{:02}-12T12:00:00Z", month),
        assigned_to: None,
    }
}

fn seed_user(id: &str, name: &str, email: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: None,
    }
}

impl MockData {
    pub fn seeded() -> Self {
        use TaskPriority::*;
        use TaskStatus::*;

        Self {
            tasks: vec![
                seed_task(
                    "1",
                    "Implement authentication",
                    Some("Set up user authentication using JWT."),
                    InProgress,
                    High,
                    1,
                ),
                seed_task("2", "Log time tracking", None, Done, Medium, 2),
                seed_task(
                    "3",
                    "Chill sometimes",
                    Some("watch a movie or go for a walk"),
                    Todo,
                    Low,
                    3,
                ),
                seed_task(
                    "4",
                    "Celebrate Christmas",
                    Some("Buy tangerines, gifts, and prepare a feast."),
                    InProgress,
                    Medium,
                    4,
                ),
                seed_task(
                    "5",
                    "Buy gifts for loved ones",
                    Some("Set of ideas: books, gadgets, and experiences."),
                    InProgress,
                    High,
                    5,
                ),
            ],
            users: vec![
                seed_user("1", "Admin", "admin@example.com"),
                seed_user("2", "User", "user@example.com"),
                seed_user("3", "Demo", "demo@example.com"),
            ],
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Next numeric id. Equals `len + 1` until something is deleted.
    fn next_id(&self) -> String {
        let max = self
            .tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max.max(self.tasks.len() as u64) + 1).to_string()
    }

    pub fn create_task(&mut self, input: Option<&Value>, now: &str) -> Result<Task, String> {
        let input = validate_required(input, REQUIRED_TASK_FIELDS)?;
        let input: CreateTaskInput =
            serde_json::from_value(input.clone()).map_err(|e| format!("Invalid input: {}", e))?;

        let (Some(title), Some(status), Some(priority)) =
            (input.title, input.status, input.priority)
        else {
            return Err("Invalid input: required field is null".to_string());
        };

        let task = Task {
            id: self.next_id(),
            title,
            description: input.description,
            status,
            priority,
            created_at: now.to_string(),
            updated_at: now.to_string(),
            assigned_to: input.assigned_to,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn update_task(&mut self, id: &str, input: Option<&Value>, now: &str) -> Result<Task, String> {
        let input = input.ok_or_else(|| "Input is required".to_string())?;
        let changes: UpdateTaskInput =
            serde_json::from_value(input.clone()).map_err(|e| format!("Invalid input: {}", e))?;

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| "Task not found".to_string())?;

        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = Some(description);
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(assigned_to) = changes.assigned_to {
            task.assigned_to = Some(assigned_to);
        }
        task.updated_at = now.to_string();
        Ok(task.clone())
    }

    pub fn delete_task(&mut self, id: &str) -> Result<bool, String> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| "Task not found".to_string())?;
        self.tasks.remove(index);
        Ok(true)
    }
}

/// Reject inputs that lack any of `fields` (absent or null).
fn validate_required<'a>(input: Option<&'a Value>, fields: &[&str]) -> Result<&'a Value, String> {
    let input = match input {
        Some(Value::Null) | None => return Err("Input is required".to_string()),
        Some(input) => input,
    };

    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| input.get(field).map_or(true, Value::is_null))
        .collect();

    if missing.is_empty() {
        Ok(input)
    } else {
        Err(format!("Missing required fields: {}", missing.join(", ")))
    }
}
