//! HTML page rendering.
//!
//! A deliberately small renderer: each function takes a data context and
//! produces a full HTML document. User-supplied values are always escaped.

use crate::models::User;

/// Data context for the create and edit forms.
#[derive(Debug, Default)]
pub struct FormContext<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub image: &'a str,
    /// Inline validation message rendered above the form
    pub error: Option<&'a str>,
}

impl<'a> FormContext<'a> {
    pub fn from_user(user: &'a User) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            image: &user.image,
            error: None,
        }
    }
}

/// Landing page with the create form.
pub fn index_page(ctx: &FormContext) -> String {
    let body = format!(
        r#"<h1>Create User</h1>
{error}
<form action="/create" method="post">
  <label>Name <input type="text" name="name" value="{name}"></label>
  <label>Email <input type="text" name="email" value="{email}"></label>
  <label>Image URL <input type="text" name="image" value="{image}"></label>
  <button type="submit">Create</button>
</form>
<p><a href="/read">View all users</a></p>"#,
        error = inline_error(ctx.error),
        name = escape(ctx.name),
        email = escape(ctx.email),
        image = escape(ctx.image),
    );
    layout("Create User", &body)
}

/// User list page.
pub fn list_page(users: &[User]) -> String {
    let mut rows = String::new();
    for user in users {
        let image_cell = if user.image.is_empty() {
            String::new()
        } else {
            format!(r#"<img src="{}" alt="avatar" width="48">"#, escape(&user.image))
        };
        rows.push_str(&format!(
            r#"  <tr>
    <td>{image}</td>
    <td>{name}</td>
    <td>{email}</td>
    <td><a href="/edit/{id}">Edit</a> <a href="/delete/{id}">Delete</a></td>
  </tr>
"#,
            image = image_cell,
            name = escape(&user.name),
            email = escape(&user.email),
            id = user.id.to_hex(),
        ));
    }

    let body = format!(
        r#"<h1>Users</h1>
<table>
  <tr><th>Image</th><th>Name</th><th>Email</th><th>Actions</th></tr>
{rows}</table>
<p><a href="/">Create a user</a></p>"#,
    );
    layout("Users", &body)
}

/// Edit form for an existing user.
pub fn edit_page(id: &str, ctx: &FormContext) -> String {
    let body = format!(
        r#"<h1>Edit User</h1>
{error}
<form action="/update/{id}" method="post">
  <label>Name <input type="text" name="name" value="{name}"></label>
  <label>Email <input type="text" name="email" value="{email}"></label>
  <label>Image URL <input type="text" name="image" value="{image}"></label>
  <button type="submit">Update</button>
</form>
<p><a href="/read">Back to list</a></p>"#,
        error = inline_error(ctx.error),
        id = escape(id),
        name = escape(ctx.name),
        email = escape(ctx.email),
        image = escape(ctx.image),
    );
    layout("Edit User", &body)
}

/// Generic error page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Something went wrong</h1>
<p class="error">{}</p>
<p><a href="/">Back to start</a></p>"#,
        escape(message)
    );
    layout("Error", &body)
}

/// Page returned for routes that match nothing.
pub fn not_found_page() -> String {
    let body = r#"<h1>Page not found</h1>
<p>The page you requested does not exist.</p>
<p><a href="/">Back to start</a></p>"#;
    layout("Not Found", body)
}

fn inline_error(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape(message)),
        None => String::new(),
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user(name: &str, email: &str, image: &str) -> User {
        User {
            id: ObjectId::new(),
            name: name.to_string(),
            email: email.to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn test_escape_handles_markup() {
        assert_eq!(
            escape(r#"<b>"x" & 'y'</b>"#),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_list_page_escapes_user_values() {
        let page = list_page(&[user("<script>", "a@x.com", "")]);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_list_page_links_use_hex_id() {
        let u = user("Ann", "a@x.com", "");
        let id = u.id.to_hex();
        let page = list_page(&[u]);
        assert!(page.contains(&format!("/edit/{}", id)));
        assert!(page.contains(&format!("/delete/{}", id)));
    }

    #[test]
    fn test_list_page_omits_image_tag_for_empty_image() {
        let page = list_page(&[user("Ann", "a@x.com", "")]);
        assert!(!page.contains("<img"));

        let page = list_page(&[user("Ann", "a@x.com", "http://i/1.png")]);
        assert!(page.contains(r#"<img src="http://i/1.png""#));
    }

    #[test]
    fn test_index_page_renders_inline_error() {
        let ctx = FormContext {
            error: Some("name is required"),
            ..FormContext::default()
        };
        let page = index_page(&ctx);
        assert!(page.contains("name is required"));
    }

    #[test]
    fn test_edit_page_preserves_submitted_values() {
        let ctx = FormContext {
            name: "Ann B",
            email: "a@x.com",
            image: "http://i/1.png",
            error: Some("email is required"),
        };
        let page = edit_page("64b5f0a1c2d3e4f5a6b7c8d9", &ctx);
        assert!(page.contains(r#"value="Ann B""#));
        assert!(page.contains(r#"action="/update/64b5f0a1c2d3e4f5a6b7c8d9""#));
    }

    #[test]
    fn test_not_found_page_mentions_missing_page() {
        assert!(not_found_page().contains("Page not found"));
    }
}
