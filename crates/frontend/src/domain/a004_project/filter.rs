use contracts::domain::a004_project::aggregate::Project;
use contracts::enums::ProjectStatus;
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{
    draft_accessors, non_empty, section_fields, FieldSpec, FilterDraft, FilterSection, FormDraft,
    FormMode, OptionsSource,
};
use crate::store::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub developer_id: Option<String>,
}

impl FilterCriteria<Project> for ProjectFilter {
    fn matches(&self, project: &Project) -> bool {
        self.status.map_or(true, |s| project.status == s)
            && self
                .developer_id
                .as_ref()
                .map_or(true, |d| &project.developer_id == d)
    }

    fn active_count(&self) -> usize {
        usize::from(self.status.is_some()) + usize::from(self.developer_id.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilterDraft {
    pub status: String,
    pub developer_id: String,
}

impl FormDraft for ProjectFilterDraft {
    type Payload = ProjectFilter;
    const INLINE_ERRORS: bool = true;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        section_fields(Self::sections())
    }

    draft_accessors! {
        text: [status, developer_id],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ProjectFilter, FieldErrors> {
        Ok(ProjectFilter {
            status: ProjectStatus::from_code(&self.status),
            developer_id: non_empty(&self.developer_id),
        })
    }
}

impl FilterDraft for ProjectFilterDraft {
    fn sections() -> Vec<FilterSection> {
        vec![
            FilterSection {
                title: "progress",
                fields: vec![FieldSpec::select(
                    "status",
                    "status",
                    OptionsSource::Static(ProjectStatus::CODES),
                )],
            },
            FilterSection {
                title: "developer",
                fields: vec![FieldSpec::select(
                    "developer_id",
                    "developer",
                    OptionsSource::Developers,
                )],
            },
        ]
    }

    fn from_criteria(criteria: &ProjectFilter) -> Self {
        Self {
            status: criteria.status.map(|s| s.code().to_string()).unwrap_or_default(),
            developer_id: criteria.developer_id.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::filter_items;

    fn project(id: &str, status: ProjectStatus, developer: &str) -> Project {
        Project {
            id: id.into(),
            name: id.into(),
            status,
            developer_id: developer.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let projects = vec![
            project("a", ProjectStatus::Planning, "d1"),
            project("b", ProjectStatus::Completed, "d2"),
        ];
        assert_eq!(filter_items(&projects, &ProjectFilter::default()).len(), 2);
        assert_eq!(ProjectFilter::default().active_count(), 0);
    }

    #[test]
    fn test_status_filter() {
        let projects = vec![
            project("a", ProjectStatus::Planning, "d1"),
            project("b", ProjectStatus::Completed, "d1"),
            project("c", ProjectStatus::Completed, "d2"),
        ];
        let draft = ProjectFilterDraft {
            status: "completed".into(),
            developer_id: "d1".into(),
        };
        let criteria = draft.criteria().unwrap();
        let kept = filter_items(&projects, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }
}
