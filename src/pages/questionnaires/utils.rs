use leptos::*;
use uuid::Uuid;

use crate::api::types::{Question, Questionnaire, QuestionnairePayload};
use crate::state::query::QueryParams;

pub const QUESTION_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("text", "Free text"),
    ("multiple_choice", "Multiple choice"),
    ("scale", "Scale"),
    ("yes_no", "Yes / No"),
];

pub fn list_params(page: usize, is_active: &str) -> QueryParams {
    let mut params = QueryParams::paged(page);
    params.push_non_empty("is_active", is_active);
    params
}

/// Pulls the template id out of an `/questionnaires/{id}/edit` path. The
/// builder route (`/questionnaires/new`) and anything else yield `None`.
pub fn editor_id_from_path(path: &str) -> Option<String> {
    path.strip_prefix("/questionnaires/")?
        .strip_suffix("/edit")
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
}

#[derive(Clone, PartialEq)]
pub struct QuestionForm {
    pub id: String,
    pub text: RwSignal<String>,
    pub question_type: RwSignal<String>,
    pub options: RwSignal<String>,
}

impl QuestionForm {
    fn blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: create_rw_signal(String::new()),
            question_type: create_rw_signal("text".to_string()),
            options: create_rw_signal(String::new()),
        }
    }

    fn from_question(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            text: create_rw_signal(question.question_text.clone()),
            question_type: create_rw_signal(question.question_type.clone()),
            options: create_rw_signal(
                question
                    .options
                    .as_deref()
                    .map(|options| options.join("\n"))
                    .unwrap_or_default(),
            ),
        }
    }

    fn to_question(&self, order: i32) -> Result<Question, String> {
        let text = self.text.get_untracked().trim().to_string();
        if text.is_empty() {
            return Err(format!("Question {} needs a text", order));
        }
        let question_type = self.question_type.get_untracked();
        let options = if question_type == "multiple_choice" {
            let choices: Vec<String> = self
                .options
                .get_untracked()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if choices.len() < 2 {
                return Err(format!("Question {} needs at least two choices", order));
            }
            Some(choices)
        } else {
            None
        };
        Ok(Question {
            id: self.id.clone(),
            question_text: text,
            question_type,
            options,
            order,
        })
    }
}

#[derive(Clone, Copy)]
pub struct QuestionnaireFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub questions: RwSignal<Vec<QuestionForm>>,
}

impl QuestionnaireFormState {
    pub fn new() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            questions: create_rw_signal(vec![QuestionForm::blank()]),
        }
    }

    pub fn load_record(&self, record: &Questionnaire) {
        self.title.set(record.title.clone());
        self.description.set(record.description.clone());
        let mut ordered = record.questions.clone();
        ordered.sort_by_key(|q| q.order);
        self.questions
            .set(ordered.iter().map(QuestionForm::from_question).collect());
    }

    pub fn add_question(&self) {
        self.questions.update(|list| list.push(QuestionForm::blank()));
    }

    pub fn remove_question(&self, id: &str) {
        self.questions.update(|list| list.retain(|q| q.id != id));
    }

    pub fn move_question_up(&self, id: &str) {
        self.questions.update(|list| {
            if let Some(at) = list.iter().position(|q| q.id == id) {
                if at > 0 {
                    list.swap(at, at - 1);
                }
            }
        });
    }

    pub fn move_question_down(&self, id: &str) {
        self.questions.update(|list| {
            if let Some(at) = list.iter().position(|q| q.id == id) {
                if at + 1 < list.len() {
                    list.swap(at, at + 1);
                }
            }
        });
    }

    /// Question order is the current list position, one-based.
    pub fn to_payload(&self) -> Result<QuestionnairePayload, String> {
        let title = self.title.get_untracked().trim().to_string();
        if title.is_empty() {
            return Err("A title is required".into());
        }
        let forms = self.questions.get_untracked();
        if forms.is_empty() {
            return Err("Add at least one question".into());
        }
        let questions = forms
            .iter()
            .enumerate()
            .map(|(at, form)| form.to_question(at as i32 + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QuestionnairePayload {
            title,
            description: self.description.get_untracked().trim().to_string(),
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_combine_paging_and_active_flag() {
        assert_eq!(list_params(1, "").to_query_string(), "offset=0&limit=20");
        assert_eq!(
            list_params(3, "true").to_query_string(),
            "offset=40&limit=20&is_active=true"
        );
    }

    #[test]
    fn type_options_cover_the_wire_enum() {
        let values: Vec<&str> = QUESTION_TYPE_OPTIONS.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, crate::api::types::QUESTION_TYPES);
    }

    #[test]
    fn editor_id_comes_from_the_edit_path_only() {
        assert_eq!(
            editor_id_from_path("/questionnaires/qst-9/edit"),
            Some("qst-9".to_string())
        );
        assert_eq!(editor_id_from_path("/questionnaires/new"), None);
        assert_eq!(editor_id_from_path("/questionnaires//edit"), None);
        assert_eq!(editor_id_from_path("/accounts"), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn payload_numbers_questions_by_position() {
        with_runtime(|| {
            let form = QuestionnaireFormState::new();
            form.title.set("Intake".into());
            form.questions.get_untracked()[0]
                .text
                .set("How are you sleeping?".into());
            form.add_question();
            form.questions.get_untracked()[1]
                .text
                .set("Anything else?".into());

            let payload = form.to_payload().unwrap();
            assert_eq!(payload.questions.len(), 2);
            assert_eq!(payload.questions[0].order, 1);
            assert_eq!(payload.questions[1].order, 2);
            assert_eq!(payload.questions[0].question_text, "How are you sleeping?");
        });
    }

    #[test]
    fn multiple_choice_needs_two_options() {
        with_runtime(|| {
            let form = QuestionnaireFormState::new();
            form.title.set("Intake".into());
            let question = &form.questions.get_untracked()[0];
            question.text.set("Preferred format?".into());
            question.question_type.set("multiple_choice".into());
            question.options.set("In person".into());
            assert!(form.to_payload().is_err());

            question.options.set("In person\nVideo call\n".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(
                payload.questions[0].options,
                Some(vec!["In person".to_string(), "Video call".to_string()])
            );
        });
    }

    #[test]
    fn reordering_swaps_neighbours_and_clamps_at_the_edges() {
        with_runtime(|| {
            let form = QuestionnaireFormState::new();
            form.add_question();
            let ids: Vec<String> = form
                .questions
                .get_untracked()
                .iter()
                .map(|q| q.id.clone())
                .collect();

            form.move_question_up(&ids[0]);
            assert_eq!(form.questions.get_untracked()[0].id, ids[0]);

            form.move_question_down(&ids[0]);
            assert_eq!(form.questions.get_untracked()[0].id, ids[1]);
            assert_eq!(form.questions.get_untracked()[1].id, ids[0]);
        });
    }
}
