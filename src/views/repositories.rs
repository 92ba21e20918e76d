//! Repository pages: listing, detail, create and edit forms.

use std::collections::BTreeMap;

use crate::constants::{LOGOUT_PATH, MSG_NO_REPOSITORIES, REPOSITORY_CREATE_PATH};
use crate::models::Repository;

use super::layout::{error_list, escape, page, status_line};

/// Owner-scoped listing with show/edit/delete controls.
pub fn index(repositories: &[Repository], status: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&status_line(status));
    body.push_str("<h1>Repositories</h1>\n");
    body.push_str(&format!(
        "<p><a href=\"{}\">New repository</a></p>\n",
        REPOSITORY_CREATE_PATH
    ));

    if repositories.is_empty() {
        body.push_str(&format!("<p>{}</p>\n", MSG_NO_REPOSITORIES));
    } else {
        body.push_str("<table>\n<tr><th>Id</th><th>Url</th><th>Actions</th></tr>\n");
        for repository in repositories {
            let id = repository.id_hex();
            body.push_str(&format!(
                "<tr><td><a href=\"/repositories/{id}\">{id}</a></td>\
                 <td>{url}</td>\
                 <td><a href=\"/repositories/{id}/edit\">Edit</a> \
                 <form method=\"post\" action=\"/repositories/{id}?_method=DELETE\">\
                 <button type=\"submit\">Delete</button></form></td></tr>\n",
                id = id,
                url = escape(&repository.url),
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\"><button type=\"submit\">Log out</button></form>\n",
        LOGOUT_PATH
    ));
    page("Repositories", &body)
}

pub fn show(repository: &Repository) -> String {
    let id = repository.id_hex();
    let body = format!(
        "<h1>Repository {id}</h1>\n\
         <p>Url: {url}</p>\n\
         <p>Description: {description}</p>\n\
         <p><a href=\"/repositories/{id}/edit\">Edit</a> <a href=\"/repositories\">Back</a></p>",
        id = id,
        url = escape(&repository.url),
        description = escape(&repository.description),
    );
    page("Repository", &body)
}

/// Create form; renders any flashed validation errors above the form.
pub fn create_form(errors: &BTreeMap<String, Vec<String>>) -> String {
    form_page("New repository", "/repositories", None, errors)
}

/// Edit form pre-filled with the record's current values.
pub fn edit_form(repository: &Repository, errors: &BTreeMap<String, Vec<String>>) -> String {
    let action = format!("/repositories/{}?_method=PUT", repository.id_hex());
    form_page("Edit repository", &action, Some(repository), errors)
}

fn form_page(
    title: &str,
    action: &str,
    repository: Option<&Repository>,
    errors: &BTreeMap<String, Vec<String>>,
) -> String {
    let url = repository.map(|r| escape(&r.url)).unwrap_or_default();
    let description = repository
        .map(|r| escape(&r.description))
        .unwrap_or_default();

    let body = format!(
        "<h1>{title}</h1>\n{errors}\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Url <input type=\"text\" name=\"url\" value=\"{url}\"></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/repositories\">Back</a></p>",
        title = escape(title),
        errors = error_list(errors),
        action = action,
        url = url,
        description = description,
    );
    page(title, &body)
}
