//! Request builders for the `/api/forms` resource.
//!
//! Every function is pure: it only decides method, path and body encoding.

use serde_json::{Map, Value};

use crate::api::request::{ApiRequest, Method, MultipartField, RequestBody};
use crate::model::payload::{CreateFormPayload, UpdateFormPayload};

pub const API_BASE: &str = "/api/forms";

fn collection_path() -> String {
    format!("{}/", API_BASE)
}

fn item_path(form_id: i64) -> String {
    format!("{}/{}/", API_BASE, form_id)
}

pub fn list() -> ApiRequest {
    ApiRequest::new(Method::Get, collection_path(), RequestBody::Empty)
}

pub fn get(form_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Get, item_path(form_id), RequestBody::Empty)
}

/// `description` is left out of the multipart body entirely when empty.
pub fn create(payload: &CreateFormPayload) -> ApiRequest {
    let mut fields = vec![
        MultipartField::text("name", payload.name.as_str()),
        MultipartField::file("xls_file", payload.xls_file.clone()),
    ];
    if let Some(description) = payload.description.as_deref().filter(|d| !d.is_empty()) {
        fields.push(MultipartField::text("description", description));
    }
    ApiRequest::new(Method::Post, collection_path(), RequestBody::Multipart(fields))
}

/// A new file forces multipart; without one the body is a JSON object holding
/// only the fields that are set.
pub fn update(form_id: i64, payload: &UpdateFormPayload) -> ApiRequest {
    let body = match &payload.xls_file {
        Some(file) => {
            let mut fields = Vec::new();
            if let Some(name) = &payload.name {
                fields.push(MultipartField::text("name", name.as_str()));
            }
            if let Some(description) = &payload.description {
                fields.push(MultipartField::text("description", description.as_str()));
            }
            fields.push(MultipartField::file("xls_file", file.clone()));
            RequestBody::Multipart(fields)
        }
        None => {
            let mut object = Map::new();
            if let Some(name) = &payload.name {
                object.insert("name".to_string(), Value::String(name.clone()));
            }
            if let Some(description) = &payload.description {
                object.insert("description".to_string(), Value::String(description.clone()));
            }
            RequestBody::Json(Value::Object(object))
        }
    };
    ApiRequest::new(Method::Patch, item_path(form_id), body)
}

pub fn delete(form_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, item_path(form_id), RequestBody::Empty)
}

pub fn submit(form_id: i64, xml_payload: &str) -> ApiRequest {
    ApiRequest::new(
        Method::Post,
        format!("{}submissions/", item_path(form_id)),
        RequestBody::Xml(xml_payload.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{JSON_CONTENT_TYPE, XML_CONTENT_TYPE};
    use crate::model::payload::Attachment;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn xlsx() -> Attachment {
        Attachment::new("test-form.xlsx", b"content".to_vec())
    }

    #[test]
    fn read_and_delete_paths() {
        assert_eq!(list().path, "/api/forms/");
        assert_eq!(get(7).path, "/api/forms/7/");
        assert_eq!(get(7).method, Method::Get);
        let removal = delete(7);
        assert_eq!(removal.method, Method::Delete);
        assert_eq!(removal.body, RequestBody::Empty);
    }

    #[test]
    fn create_without_description_sends_name_and_file_only() {
        let request = create(&CreateFormPayload {
            name: "New Form".to_string(),
            xls_file: xlsx(),
            description: None,
        });
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/forms/");
        assert_eq!(request.body.field_names(), vec!["name", "xls_file"]);
        assert_eq!(request.body.content_type(), None);
    }

    #[test]
    fn create_with_empty_description_omits_the_field() {
        let request = create(&CreateFormPayload {
            name: "New Form".to_string(),
            xls_file: xlsx(),
            description: Some(String::new()),
        });
        assert_eq!(request.body.field_names(), vec!["name", "xls_file"]);
    }

    #[test]
    fn create_with_description_includes_it() {
        let request = create(&CreateFormPayload {
            name: "New Form".to_string(),
            xls_file: xlsx(),
            description: Some("Test description".to_string()),
        });
        let RequestBody::Multipart(fields) = request.body else {
            panic!("create must be multipart");
        };
        assert_eq!(fields[2], MultipartField::text("description", "Test description"));
        assert_eq!(fields[1], MultipartField::file("xls_file", xlsx()));
    }

    #[test]
    fn update_with_only_name_is_exact_json() {
        let request = update(
            1,
            &UpdateFormPayload {
                name: Some("X".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.path, "/api/forms/1/");
        assert_eq!(request.body, RequestBody::Json(json!({"name": "X"})));
        assert_eq!(request.body.content_type(), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn update_without_fields_sends_empty_object() {
        let request = update(3, &UpdateFormPayload::default());
        assert_eq!(request.body, RequestBody::Json(json!({})));
    }

    #[test]
    fn update_with_file_is_multipart_whatever_else_is_set() {
        let only_file = update(
            1,
            &UpdateFormPayload {
                xls_file: Some(xlsx()),
                ..Default::default()
            },
        );
        assert_eq!(only_file.body.field_names(), vec!["xls_file"]);

        let everything = update(
            1,
            &UpdateFormPayload {
                name: Some("Test Form".to_string()),
                description: Some("Test description".to_string()),
                xls_file: Some(xlsx()),
            },
        );
        assert_eq!(
            everything.body.field_names(),
            vec!["name", "description", "xls_file"]
        );
    }

    #[test]
    fn submit_posts_raw_xml() {
        let request = submit(1, "<data><field>value</field></data>");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/forms/1/submissions/");
        assert_eq!(
            request.body,
            RequestBody::Xml("<data><field>value</field></data>".to_string())
        );
        assert_eq!(request.body.content_type(), Some(XML_CONTENT_TYPE));
    }
}
