use crate::core::{BasecampApi, ConfigProvider, Person, PersonDirectory};
use crate::utils::error::{Result, SyncError};

pub fn people_path(project_id: &str) -> String {
    format!("projects/{}/people.xml", project_id)
}

/// Parses the `<people>` listing returned by Basecamp.
pub fn parse_people(xml: &str) -> Result<Vec<Person>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| SyncError::format(format!("people listing is not valid XML: {}", e)))?;

    let root = doc.root_element();
    if !root.has_tag_name("people") {
        return Err(SyncError::format(format!(
            "expected a <people> listing, got <{}>",
            root.tag_name().name()
        )));
    }

    let mut people = Vec::new();
    for node in root
        .children()
        .filter(|n| n.has_tag_name("person"))
    {
        let child_text = |tag: &str| -> Result<String> {
            node.children()
                .find(|c| c.has_tag_name(tag))
                .map(|c| c.text().unwrap_or_default().trim().to_string())
                .ok_or_else(|| SyncError::format(format!("<person> entry without <{}>", tag)))
        };

        let basecamp_id = child_text("id")?;
        if basecamp_id.is_empty() {
            return Err(SyncError::format("<person> entry with an empty <id>"));
        }

        people.push(Person {
            basecamp_id,
            first_name: child_text("first-name")?,
            last_name: child_text("last-name")?,
        });
    }

    Ok(people)
}

/// Fetches the project's people once and indexes them by display name.
pub async fn fetch_directory<A, C>(api: &A, config: &C) -> Result<PersonDirectory>
where
    A: BasecampApi + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let body = api.get_xml(&people_path(config.project_id())).await?;
    let people = parse_people(&body)?;
    let directory = PersonDirectory::from_people(people, config.use_only_first_name());

    tracing::info!("Loaded {} people from Basecamp", directory.len());
    for (name, id) in directory.iter() {
        tracing::debug!("  {} => {}", name, id);
    }

    Ok(directory)
}
