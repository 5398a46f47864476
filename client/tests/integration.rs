//! Full CRUD lifecycle test against the live server.
//!
//! # Design
//! Starts the todo server on a random port, then exercises every client
//! operation over real HTTP using ureq. Validates that the client's request
//! building and response parsing work end-to-end with the actual server,
//! including the 400 rejection paths (the service never answers 404).

use todo_client::{ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation.
fn execute(req: todo_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Unwrap a `Rejected` error and return the field named by its first failure.
fn rejected_field(err: ApiError) -> String {
    match err {
        ApiError::Rejected(body) => {
            assert!(!body.message.is_empty());
            body.failures[0].field.clone()
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 3: creating with an empty title is rejected.
    let bad_input = CreateTodo {
        title: String::new(),
    };
    let req = client.build_create_todo(&bad_input).unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert_eq!(rejected_field(err), "title");

    // Step 4: create a todo.
    let create_input = CreateTodo {
        title: "Integration test".to_string(),
    };
    let req = client.build_create_todo(&create_input).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.title, "Integration test");
    assert_eq!(created.created_at, created.updated_at);
    let id = created.id;

    // Step 5: get the created todo.
    let req = client.build_get_todo(id);
    let fetched = client.parse_get_todo(execute(req)).unwrap();
    assert_eq!(fetched, created);

    // Step 6: getting an unknown id is rejected, not 404.
    let req = client.build_get_todo(uuid::Uuid::new_v4());
    let err = client.parse_get_todo(execute(req)).unwrap_err();
    assert_eq!(rejected_field(err), "id");

    // Step 7: update the title.
    let update_input = UpdateTodo {
        title: "Updated title".to_string(),
    };
    let req = client.build_update_todo(id, &update_input).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // Step 8: updating with an empty title is rejected, record untouched.
    let bad_update = UpdateTodo {
        title: String::new(),
    };
    let req = client.build_update_todo(id, &bad_update).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert_eq!(rejected_field(err), "title");

    let req = client.build_get_todo(id);
    let unchanged = client.parse_get_todo(execute(req)).unwrap();
    assert_eq!(unchanged.title, "Updated title");

    // Step 9: list — should have one item.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(todos.len(), 1);

    // Step 10: delete.
    let req = client.build_delete_todo(id);
    client.parse_delete_todo(execute(req)).unwrap();

    // Step 11: get after delete — rejected.
    let req = client.build_get_todo(id);
    let err = client.parse_get_todo(execute(req)).unwrap_err();
    assert_eq!(rejected_field(err), "id");

    // Step 12: delete again — already gone, rejected.
    let req = client.build_delete_todo(id);
    let err = client.parse_delete_todo(execute(req)).unwrap_err();
    assert_eq!(rejected_field(err), "id");

    // Step 13: list — should be empty again.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}
