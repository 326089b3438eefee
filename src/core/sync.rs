use crate::core::{BasecampApi, ConfigProvider, Milestone};
use crate::utils::error::{Result, SyncError};

/// Appended to every calendar entry title created by this tool.
pub const TITLE_SUFFIX: &str = " ###";

pub fn calendar_entries_path(project_id: &str) -> String {
    format!("projects/{}/calendar_entries.xml", project_id)
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders the `calendar-entry` creation request for a resolved milestone.
pub fn render_calendar_entry(milestone: &Milestone) -> Result<String> {
    let assigned_id = milestone
        .assigned_id
        .as_deref()
        .ok_or_else(|| SyncError::Validation {
            message: format!("milestone '{}' has no responsible party", milestone.name),
        })?;

    Ok(format!(
        r#"<request>
  <calendar-entry>
    <title>{title}{suffix}</title>
    <deadline type="date">{deadline}</deadline>
    <type>Milestone</type>
    <responsible-party>{party}</responsible-party>
  </calendar-entry>
</request>"#,
        title = escape_xml(&milestone.name),
        suffix = TITLE_SUFFIX,
        deadline = milestone.date.format("%Y-%m-%d"),
        party = escape_xml(assigned_id),
    ))
}

/// Writes milestones to the project calendar, one request each.
pub struct MilestoneSync<'a, A: BasecampApi + ?Sized, C: ConfigProvider + ?Sized> {
    api: &'a A,
    config: &'a C,
}

impl<'a, A: BasecampApi + ?Sized, C: ConfigProvider + ?Sized> MilestoneSync<'a, A, C> {
    pub fn new(api: &'a A, config: &'a C) -> Self {
        Self { api, config }
    }

    pub async fn submit(&self, milestone: &Milestone) -> Result<()> {
        let payload = render_calendar_entry(milestone)?;
        let path = calendar_entries_path(self.config.project_id());
        self.api.post_xml(&path, payload).await?;

        tracing::info!(
            "Created milestone '{}' due {} for {}",
            milestone.name,
            milestone.date,
            milestone.assigned_id.as_deref().unwrap_or_default()
        );
        Ok(())
    }

    /// Submits in order and stops at the first failure. Entries already
    /// created stay in Basecamp.
    pub async fn submit_all(&self, milestones: &[Milestone]) -> Result<usize> {
        for (count, milestone) in milestones.iter().enumerate() {
            if let Err(e) = self.submit(milestone).await {
                tracing::error!(
                    "Stopping after {} of {} milestones: {}",
                    count,
                    milestones.len(),
                    e
                );
                return Err(e);
            }
        }
        Ok(milestones.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        posts: Mutex<Vec<(String, String)>>,
        fail_after: Option<usize>,
    }

    #[async_trait]
    impl BasecampApi for RecordingApi {
        async fn get_xml(&self, _path: &str) -> Result<String> {
            unreachable!("sync never reads")
        }

        async fn post_xml(&self, path: &str, body: String) -> Result<String> {
            let mut posts = self.posts.lock().unwrap();
            if Some(posts.len()) == self.fail_after {
                return Err(SyncError::Remote {
                    url: path.to_string(),
                    status: 422,
                    body: "<errors><error>Deadline is invalid</error></errors>".to_string(),
                });
            }
            posts.push((path.to_string(), body));
            Ok(String::new())
        }
    }

    fn config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[basecamp]
url = "https://example.basecamphq.com"
token = "abc"
project_id = "42"
default_assignee_id = "999"
"#,
        )
        .unwrap()
    }

    fn milestone(name: &str, assigned_id: Option<&str>) -> Milestone {
        Milestone {
            name: name.to_string(),
            start: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            assigned: String::new(),
            assigned_id: assigned_id.map(str::to_string),
            completed: String::new(),
        }
    }

    #[test]
    fn test_render_calendar_entry() {
        let xml = render_calendar_entry(&milestone("Launch", Some("101"))).unwrap();

        assert!(xml.starts_with("<request>"));
        assert!(xml.contains("<title>Launch ###</title>"));
        assert!(xml.contains(r#"<deadline type="date">2024-03-15</deadline>"#));
        assert!(xml.contains("<type>Milestone</type>"));
        assert!(xml.contains("<responsible-party>101</responsible-party>"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let xml = render_calendar_entry(&milestone("R&D <alpha>", Some("1"))).unwrap();
        assert!(xml.contains("<title>R&amp;D &lt;alpha&gt; ###</title>"));
        assert!(roxmltree::Document::parse(&xml).is_ok());
    }

    #[test]
    fn test_render_requires_assigned_id() {
        assert!(matches!(
            render_calendar_entry(&milestone("Launch", None)),
            Err(SyncError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_submit_all_in_order() {
        let api = RecordingApi::default();
        let config = config();
        let sync = MilestoneSync::new(&api, &config);

        let submitted = sync
            .submit_all(&[milestone("First", Some("1")), milestone("Second", Some("2"))])
            .await
            .unwrap();

        assert_eq!(submitted, 2);
        let posts = api.posts.lock().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].0, "projects/42/calendar_entries.xml");
        assert!(posts[0].1.contains("<title>First ###</title>"));
        assert!(posts[1].1.contains("<title>Second ###</title>"));
    }

    #[tokio::test]
    async fn test_submit_all_stops_on_remote_failure() {
        let api = RecordingApi {
            fail_after: Some(1),
            ..Default::default()
        };
        let config = config();
        let sync = MilestoneSync::new(&api, &config);

        let result = sync
            .submit_all(&[
                milestone("First", Some("1")),
                milestone("Second", Some("2")),
                milestone("Third", Some("3")),
            ])
            .await;

        match result {
            Err(SyncError::Remote { status, body, .. }) => {
                assert_eq!(status, 422);
                assert!(body.contains("Deadline is invalid"));
            }
            other => panic!("expected remote error, got {:?}", other),
        }
        assert_eq!(api.posts.lock().unwrap().len(), 1);
    }
}
