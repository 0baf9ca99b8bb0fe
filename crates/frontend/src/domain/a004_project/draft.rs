use contracts::domain::a004_project::aggregate::{Project, ProjectDto};
use contracts::enums::ProjectStatus;
use contracts::shared::validation::{format_optional_date, FieldErrors};

use crate::shared::form::{
    draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode, OptionsSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub developer_id: String,
    pub location: String,
    pub status: String,
    pub total_units: String,
    pub launch_date: String,
    pub description: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            developer_id: String::new(),
            location: String::new(),
            status: ProjectStatus::default().code().to_string(),
            total_units: String::new(),
            launch_date: String::new(),
            description: String::new(),
        }
    }
}

impl FormDraft for ProjectDraft {
    type Payload = ProjectDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::select("developer_id", "developer", OptionsSource::Developers).required(),
            FieldSpec::text("location", "location"),
            FieldSpec::select("status", "status", OptionsSource::Static(ProjectStatus::CODES)),
            FieldSpec::number("total_units", "totalUnits"),
            FieldSpec::new("launch_date", "launchDate", FieldKind::Date),
            FieldSpec::new("description", "description", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [name, developer_id, location, status, total_units, launch_date, description],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ProjectDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let total_units = errors.integer("total_units", &self.total_units);
        let launch_date = errors.date("launch_date", &self.launch_date);
        errors.into_result(ProjectDto {
            name: self.name.trim().to_string(),
            developer_id: self.developer_id.trim().to_string(),
            location: self.location.trim().to_string(),
            status: ProjectStatus::from_code(&self.status).unwrap_or_default(),
            total_units,
            launch_date,
            description: self.description.clone(),
        })
    }
}

impl EntityDraft for ProjectDraft {
    type Entity = Project;

    fn from_entity(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            developer_id: project.developer_id.clone(),
            location: project.location.clone(),
            status: project.status.code().to_string(),
            total_units: project.total_units.map(|n| n.to_string()).unwrap_or_default(),
            launch_date: format_optional_date(project.launch_date),
            description: project.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::validation::messages;

    #[test]
    fn test_developer_required() {
        let draft = ProjectDraft {
            name: "Marina Heights".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("developer_id"), Some(messages::FIELD_REQUIRED));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_bad_launch_date() {
        let draft = ProjectDraft {
            name: "Marina Heights".into(),
            developer_id: "d1".into(),
            launch_date: "next spring".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("launch_date"), Some(messages::INVALID_DATE));
    }

    #[test]
    fn test_edit_seeds_from_project() {
        let project = Project {
            id: "p1".into(),
            name: "Marina Heights".into(),
            developer_id: "d1".into(),
            status: ProjectStatus::UnderConstruction,
            total_units: Some(240),
            launch_date: NaiveDate::from_ymd_opt(2025, 3, 15),
            ..Default::default()
        };
        let draft = ProjectDraft::from_entity(&project);
        assert_eq!(draft.status, "under_construction");
        assert_eq!(draft.total_units, "240");
        assert_eq!(draft.launch_date, "2025-03-15");

        let payload = draft.validate(&FormMode::Edit { id: "p1".into() }).unwrap();
        assert_eq!(payload.total_units, Some(240));
        assert_eq!(payload.launch_date, project.launch_date);
    }
}
