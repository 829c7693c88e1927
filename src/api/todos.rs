use actix_web::{web, HttpRequest, HttpResponse};

use crate::api::form::{read_todo_form, MAX_FORM_BYTES};
use crate::api::response::{Created, StatusData, StatusMessage};
use crate::error::ApiError;
use crate::models::todo::{TodoRecord, TodoView};
use crate::repository::{ConnectionProvider, TodoRepository};

pub async fn create_todo<P: ConnectionProvider>(
    provider: web::Data<P>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let form = read_todo_form(&req, body).await;
    let completed = form.completed_flag();
    let todo = TodoRecord::new(form.title, completed);

    let conn = provider.acquire();
    conn.insert(&todo).await.map_err(ApiError::Store)?;
    log::info!("created todo {}", todo.id);

    Ok(HttpResponse::Created().json(Created {
        status: 201,
        message: "Todo item created successfully!".to_string(),
        resource_id: todo.id,
    }))
}

pub async fn fetch_all_todos<P: ConnectionProvider>(
    provider: web::Data<P>,
) -> Result<HttpResponse, ApiError> {
    let conn = provider.acquire();
    let todos = conn.find_all().await.map_err(ApiError::Store)?;
    if todos.is_empty() {
        return Err(ApiError::NoTodos);
    }
    Ok(HttpResponse::Ok().json(StatusData {
        status: 200,
        data: todos.iter().map(TodoView::from).collect::<Vec<_>>(),
    }))
}

pub async fn fetch_todo<P: ConnectionProvider>(
    provider: web::Data<P>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = provider.acquire();
    let todo = conn
        .find_by_id(&id)
        .await
        .map_err(ApiError::Store)?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(StatusData {
        status: 200,
        data: TodoView::from(&todo),
    }))
}

pub async fn update_todo<P: ConnectionProvider>(
    provider: web::Data<P>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let conn = provider.acquire();
    let existing = conn
        .find_by_id(&id)
        .await
        .map_err(ApiError::Store)?
        .ok_or(ApiError::NotFound)?;

    let form = read_todo_form(&req, body).await;
    let todo = TodoRecord {
        completed: form.completed_flag(),
        title: form.title,
        ..existing
    };
    conn.update_by_id(&id, &todo).await.map_err(ApiError::Update)?;
    log::info!("updated todo {}", todo.id);

    Ok(HttpResponse::Ok().json(StatusMessage::new(200, "Todo update successfully!")))
}

pub async fn delete_todo<P: ConnectionProvider>(
    provider: web::Data<P>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = provider.acquire();
    conn.find_by_id(&id)
        .await
        .map_err(ApiError::Store)?
        .ok_or(ApiError::NotFound)?;
    conn.remove_by_id(&id).await.map_err(ApiError::Store)?;
    log::info!("deleted todo {}", id);

    Ok(HttpResponse::Ok().json(StatusMessage::new(200, "Todo deleted successfully!")))
}

pub fn config<P: ConnectionProvider>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/todos")
            .app_data(web::PayloadConfig::new(MAX_FORM_BYTES))
            .service(
                web::resource(["", "/"])
                    .route(web::post().to(create_todo::<P>))
                    .route(web::get().to(fetch_all_todos::<P>)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(fetch_todo::<P>))
                    .route(web::put().to(update_todo::<P>))
                    .route(web::delete().to(delete_todo::<P>)),
            ),
    );
}
