//! Task and user operations over the GraphQL client.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::graphql::{GraphQLError, GraphQLService};
use crate::models::{CreateTaskInput, Task, UpdateTaskInput, UserProfile};

/// Documents understood by the backend.
pub mod operations {
    use crate::graphql::Operation;

    pub const TASKS: Operation = Operation {
        name: "tasks",
        document: "query tasks { tasks { id title description status priority createdAt updatedAt assignedTo } }",
    };

    pub const TASK: Operation = Operation {
        name: "task",
        document: "query task($id: ID!) { task(id: $id) { id title description status priority createdAt updatedAt assignedTo } }",
    };

    pub const USERS: Operation = Operation {
        name: "users",
        document: "query users { users { id name email avatar } }",
    };

    pub const USER: Operation = Operation {
        name: "user",
        document: "query user($id: ID!) { user(id: $id) { id name email avatar } }",
    };

    pub const CREATE_TASK: Operation = Operation {
        name: "createTask",
        document: "mutation createTask($input: TaskInput!) { createTask(input: $input) { id title description status priority createdAt updatedAt assignedTo } }",
    };

    pub const UPDATE_TASK: Operation = Operation {
        name: "updateTask",
        document: "mutation updateTask($id: ID!, $input: UpdateTaskInput!) { updateTask(id: $id, input: $input) { id title description status priority createdAt updatedAt assignedTo } }",
    };

    pub const DELETE_TASK: Operation = Operation {
        name: "deleteTask",
        document: "mutation deleteTask($id: ID!) { deleteTask(id: $id) }",
    };
}

#[derive(Deserialize)]
struct TasksData {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct TaskData {
    task: Option<Task>,
}

#[derive(Deserialize)]
struct UsersData {
    users: Vec<UserProfile>,
}

#[derive(Deserialize)]
struct UserData {
    user: Option<UserProfile>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskData {
    create_task: Task,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskData {
    update_task: Task,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteTaskData {
    delete_task: bool,
}

/// Typed façade over the task operations.
#[derive(Clone)]
pub struct TaskService {
    graphql: Arc<GraphQLService>,
}

impl TaskService {
    pub fn new(graphql: Arc<GraphQLService>) -> Self {
        Self { graphql }
    }

    pub async fn get_tasks(&self) -> Result<Vec<Task>, GraphQLError> {
        let data: TasksData = self.graphql.query(&operations::TASKS, json!({})).await?;
        Ok(data.tasks)
    }

    pub async fn get_task(&self, id: &str) -> Result<Option<Task>, GraphQLError> {
        let data: TaskData = self
            .graphql
            .query(&operations::TASK, json!({ "id": id }))
            .await?;
        Ok(data.task)
    }

    pub async fn get_users(&self) -> Result<Vec<UserProfile>, GraphQLError> {
        let data: UsersData = self.graphql.query(&operations::USERS, json!({})).await?;
        Ok(data.users)
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<UserProfile>, GraphQLError> {
        let data: UserData = self
            .graphql
            .query(&operations::USER, json!({ "id": id }))
            .await?;
        Ok(data.user)
    }

    pub async fn create_task(&self, input: &CreateTaskInput) -> Result<Task, GraphQLError> {
        let data: CreateTaskData = self
            .graphql
            .mutate(&operations::CREATE_TASK, json!({ "input": input }))
            .await?;
        Ok(data.create_task)
    }

    pub async fn update_task(
        &self,
        id: &str,
        changes: &UpdateTaskInput,
    ) -> Result<Task, GraphQLError> {
        let data: UpdateTaskData = self
            .graphql
            .mutate(
                &operations::UPDATE_TASK,
                json!({ "id": id, "input": changes }),
            )
            .await?;
        Ok(data.update_task)
    }

    /// Returns whether the backend removed the task.
    pub async fn delete_task(&self, id: &str) -> Result<bool, GraphQLError> {
        let data: DeleteTaskData = self
            .graphql
            .mutate(&operations::DELETE_TASK, json!({ "id": id }))
            .await?;
        Ok(data.delete_task)
    }
}
