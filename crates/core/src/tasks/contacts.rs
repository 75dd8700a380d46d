//! Stable-sort a JSON array of contacts by `(last_name, first_name)`.

use crate::engine::TaskContext;
use crate::extract::ParamSet;
use anyhow::{Context, Result};
use serde_json::Value;

fn sort_key(contact: &Value) -> (&str, &str) {
    let field = |name| contact.get(name).and_then(Value::as_str).unwrap_or("");
    (field("last_name"), field("first_name"))
}

pub async fn sort(ctx: &TaskContext, params: &ParamSet) -> Result<String> {
    let input = ctx.data_path(params.require("input")?);
    let content = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut contacts: Vec<Value> =
        serde_json::from_str(&content).context("contacts file is not a JSON array")?;
    // sort_by is stable, so equal keys keep their input order
    contacts.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

    let output = ctx.data_path(params.require("output")?);
    tokio::fs::write(&output, serde_json::to_string(&contacts)?)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok("Contacts sorted successfully".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing;

    async fn run_sort(dir: &std::path::Path, input: &str) -> Vec<Value> {
        std::fs::write(dir.join("contacts.json"), input).unwrap();
        let ctx = testing::ctx(dir);
        let params = testing::params(&[("input", "contacts.json"), ("output", "sorted.json")]);
        sort(&ctx, &params).await.unwrap();
        serde_json::from_str(&std::fs::read_to_string(dir.join("sorted.json")).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_sorts_by_last_then_first_name() {
        let dir = tempfile::tempdir().unwrap();
        let sorted = run_sort(
            dir.path(),
            r#"[{"first_name":"B","last_name":"Y"},{"first_name":"A","last_name":"X"}]"#,
        )
        .await;

        assert_eq!(sorted[0]["first_name"], "A");
        assert_eq!(sorted[1]["first_name"], "B");
    }

    #[tokio::test]
    async fn test_first_name_breaks_last_name_ties() {
        let dir = tempfile::tempdir().unwrap();
        let sorted = run_sort(
            dir.path(),
            r#"[{"first_name":"Zoe","last_name":"Smith"},{"first_name":"Amy","last_name":"Smith"}]"#,
        )
        .await;

        assert_eq!(sorted[0]["first_name"], "Amy");
    }

    #[tokio::test]
    async fn test_sorting_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let once = run_sort(
            dir.path(),
            r#"[{"first_name":"B","last_name":"Y"},{"first_name":"A","last_name":"X"}]"#,
        )
        .await;
        let again = run_sort(dir.path(), &serde_json::to_string(&once).unwrap()).await;
        assert_eq!(once, again);
    }

    #[tokio::test]
    async fn test_non_array_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("contacts.json"), r#"{"not": "an array"}"#).unwrap();
        let ctx = testing::ctx(dir.path());
        let params = testing::params(&[("input", "contacts.json"), ("output", "sorted.json")]);
        assert!(sort(&ctx, &params).await.is_err());
    }
}
