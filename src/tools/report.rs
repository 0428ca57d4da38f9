//! Text rendering for activity reports.
//!
//! Reports are plain text lines joined with `\n`. Field order is fixed per
//! report kind, and the per-activity blocks of the three list reports differ
//! on purpose: the type-filtered list drops the `Tipo` line and the per-user
//! list drops the `Responsável` line.

use crate::error::PipeRunApiError;
use crate::models::activity::display_or_empty;
use crate::models::{Activity, ActivityPage};

/// Sentinel for an unfiltered list with no results.
pub const NO_ACTIVITIES: &str = "Nenhuma atividade encontrada.";

/// Sentinel for a single activity lookup with an empty payload.
pub fn activity_not_found(id: i64) -> String {
    format!("Atividade com ID {} não encontrada.", id)
}

/// Sentinel for a type-filtered list with no results.
pub fn no_activities_of_type(activity_type: &str) -> String {
    format!("Nenhuma atividade do tipo '{}' encontrada.", activity_type)
}

/// Sentinel for a per-user list with no results.
pub fn no_activities_for_user(user_id: i64) -> String {
    format!(
        "Nenhuma atividade encontrada para o usuário com ID {}.",
        user_id
    )
}

/// Lines included in each block of a list report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    /// id, title, status, type, created, due, assignee
    Full,
    /// no type line
    WithoutType,
    /// no assignee line
    WithoutAssignee,
}

/// Report for `list_activities`.
pub fn render_activity_list(page: &ActivityPage) -> String {
    let header = format!("Total de atividades: {}", page.total_or_zero());
    render_list(header, page, Block::Full)
}

/// Report for `filter_by_type`.
pub fn render_type_list(activity_type: &str, page: &ActivityPage) -> String {
    let header = format!(
        "Total de atividades do tipo '{}': {}",
        activity_type,
        page.total_or_zero()
    );
    render_list(header, page, Block::WithoutType)
}

/// Report for `activities_by_user`.
pub fn render_user_list(user_id: i64, page: &ActivityPage) -> String {
    let header = format!(
        "Total de atividades do usuário (ID: {}): {}",
        user_id,
        page.total_or_zero()
    );
    render_list(header, page, Block::WithoutAssignee)
}

fn render_list(header: String, page: &ActivityPage, block: Block) -> String {
    // header is followed by an empty line
    let mut lines = vec![header, String::new()];

    for (i, activity) in page.data.iter().enumerate() {
        lines.push(format!("--- Atividade {} ---", i + 1));
        lines.push(format!("ID: {}", display_or_empty(&activity.id)));
        lines.push(format!("Título: {}", display_or_empty(&activity.title)));
        lines.push(format!("Status: {}", display_or_empty(&activity.status)));
        if block != Block::WithoutType {
            lines.push(format!("Tipo: {}", display_or_empty(&activity.activity_type)));
        }
        lines.push(format!(
            "Data de criação: {}",
            display_or_empty(&activity.created_at)
        ));
        lines.push(format!(
            "Data de vencimento: {}",
            activity.due_date_or_default()
        ));
        if block != Block::WithoutAssignee {
            lines.push(format!("Responsável: {}", activity.assignee_or_default()));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Report for `get_activity`, headed by the requested id.
pub fn render_activity_details(id: i64, activity: &Activity) -> String {
    let mut lines = vec![
        format!("--- Detalhes da Atividade {} ---", id),
        format!("Título: {}", display_or_empty(&activity.title)),
        format!("Descrição: {}", activity.description_or_default()),
        format!("Status: {}", display_or_empty(&activity.status)),
        format!("Tipo: {}", display_or_empty(&activity.activity_type)),
        format!("Data de criação: {}", display_or_empty(&activity.created_at)),
        format!("Data de vencimento: {}", activity.due_date_or_default()),
        format!("Responsável: {}", activity.assignee_or_default()),
    ];

    if let Some(deal) = activity.linked_deal() {
        lines.push(String::new());
        lines.push("Negócio Associado:".to_string());
        lines.push(format!("Nome: {}", display_or_empty(&deal.title)));
        lines.push(format!("Valor: {}", display_or_empty(&deal.value)));
        lines.push(format!("Status: {}", display_or_empty(&deal.status)));
    }

    if let Some(company) = activity.linked_company() {
        lines.push(String::new());
        lines.push("Empresa Associada:".to_string());
        lines.push(format!("Nome: {}", display_or_empty(&company.name)));
        lines.push(format!("CNPJ: {}", display_or_empty(&company.document)));
    }

    let comments = activity.comment_list();
    if !comments.is_empty() {
        lines.push(String::new());
        lines.push("Comentários:".to_string());
        for (i, comment) in comments.iter().enumerate() {
            lines.push(format!(
                "{}. {} - por {} em {}",
                i + 1,
                display_or_empty(&comment.text),
                comment.author(),
                display_or_empty(&comment.created_at)
            ));
        }
    }

    lines.join("\n")
}

/// What a failed query was looking for, used in HTTP error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Activity,
    Activities,
}

impl Subject {
    fn noun(self) -> &'static str {
        match self {
            Subject::Activity => "atividade",
            Subject::Activities => "atividades",
        }
    }
}

/// Turn an API error into the message returned in place of a report.
pub fn render_error(error: &PipeRunApiError, subject: Subject) -> String {
    match error {
        PipeRunApiError::Http { status, body } => {
            format!("Erro ao consultar {}: {} - {}", subject.noun(), status, body)
        }
        other => format!("Erro ao processar requisição: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: serde_json::Value) -> ActivityPage {
        serde_json::from_value(value).unwrap()
    }

    fn activity(value: serde_json::Value) -> Activity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_list_report() {
        let report = render_activity_list(&page(json!({
            "data": [{
                "id": 1,
                "title": "Call X",
                "status": "open",
                "type": "call",
                "created_at": "2024-01-01"
            }],
            "total": 1
        })));

        let expected = "Total de atividades: 1\n\
                        \n\
                        --- Atividade 1 ---\n\
                        ID: 1\n\
                        Título: Call X\n\
                        Status: open\n\
                        Tipo: call\n\
                        Data de criação: 2024-01-01\n\
                        Data de vencimento: Não definida\n\
                        Responsável: Não atribuído\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_blocks_are_numbered_in_order() {
        let report = render_activity_list(&page(json!({
            "data": [
                { "id": 10, "title": "A", "user": { "name": "Ana" }, "due_date": "2024-03-01" },
                { "id": 11, "title": "B" }
            ],
            "total": 25
        })));

        assert!(report.starts_with("Total de atividades: 25\n\n"));
        let first = report.find("--- Atividade 1 ---").unwrap();
        let second = report.find("--- Atividade 2 ---").unwrap();
        assert!(first < second);
        assert!(report.contains("Responsável: Ana"));
        assert!(report.contains("Data de vencimento: 2024-03-01"));
        assert!(!report.contains("None"));
        assert!(!report.contains("null"));
    }

    #[test]
    fn test_type_list_omits_type_line() {
        let report = render_type_list(
            "meeting",
            &page(json!({ "data": [{ "id": 3, "type": "meeting" }], "total": 1 })),
        );

        assert!(report.starts_with("Total de atividades do tipo 'meeting': 1\n\n"));
        assert!(!report.contains("Tipo:"));
        assert!(report.contains("Responsável: Não atribuído"));
    }

    #[test]
    fn test_user_list_omits_assignee_line() {
        let report = render_user_list(
            7,
            &page(json!({ "data": [{ "id": 3, "type": "email", "user": { "name": "Bia" } }] })),
        );

        assert!(report.starts_with("Total de atividades do usuário (ID: 7): 0\n\n"));
        assert!(report.contains("Tipo: email"));
        assert!(!report.contains("Responsável"));
        assert!(!report.contains("Bia"));
    }

    #[test]
    fn test_details_without_optional_sections() {
        let report = render_activity_details(
            42,
            &activity(json!({ "id": 42, "title": "Visita", "status": "done", "type": "visit" })),
        );

        let expected = "--- Detalhes da Atividade 42 ---\n\
                        Título: Visita\n\
                        Descrição: Sem descrição\n\
                        Status: done\n\
                        Tipo: visit\n\
                        Data de criação: \n\
                        Data de vencimento: Não definida\n\
                        Responsável: Não atribuído";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_details_with_all_sections() {
        let report = render_activity_details(
            5,
            &activity(json!({
                "title": "Proposta",
                "description": "Enviar proposta",
                "status": "open",
                "type": "email",
                "created_at": "2024-01-02",
                "due_date": "2024-01-09",
                "user": { "name": "Carla" },
                "deal": { "title": "Contrato anual", "value": 12000.5, "status": "open" },
                "company": { "name": "ACME Ltda", "document": "12.345.678/0001-90" },
                "comments": [
                    { "text": "Primeiro contato", "user": { "name": "Carla" }, "created_at": "2024-01-03" },
                    { "text": "Retornar", "user": { "name": "Davi" }, "created_at": "2024-01-04" }
                ]
            })),
        );

        let tail = "Responsável: Carla\n\
                    \n\
                    Negócio Associado:\n\
                    Nome: Contrato anual\n\
                    Valor: 12000.5\n\
                    Status: open\n\
                    \n\
                    Empresa Associada:\n\
                    Nome: ACME Ltda\n\
                    CNPJ: 12.345.678/0001-90\n\
                    \n\
                    Comentários:\n\
                    1. Primeiro contato - por Carla em 2024-01-03\n\
                    2. Retornar - por Davi em 2024-01-04";
        assert!(report.ends_with(tail), "unexpected report:\n{}", report);
        assert!(report.contains("Descrição: Enviar proposta"));
    }

    #[test]
    fn test_details_only_company() {
        let report = render_activity_details(
            8,
            &activity(json!({ "company": { "name": "Beta SA" }, "deal": {}, "comments": [] })),
        );

        assert!(report.contains("Empresa Associada:"));
        assert!(!report.contains("Negócio Associado:"));
        assert!(!report.contains("Comentários:"));
    }

    #[test]
    fn test_details_links_objects_with_unknown_keys_only() {
        let report = render_activity_details(
            4,
            &activity(json!({ "deal": { "id": 5 }, "company": { "id": 9 } })),
        );

        assert!(report.ends_with(
            "\n\nNegócio Associado:\nNome: \nValor: \nStatus: \n\nEmpresa Associada:\nNome: \nCNPJ: "
        ));
    }

    #[test]
    fn test_render_http_error() {
        let error = PipeRunApiError::Http {
            status: 500,
            body: "Internal Server Error".to_string(),
        };

        assert_eq!(
            render_error(&error, Subject::Activities),
            "Erro ao consultar atividades: 500 - Internal Server Error"
        );
        assert_eq!(
            render_error(&error, Subject::Activity),
            "Erro ao consultar atividade: 500 - Internal Server Error"
        );
    }

    #[test]
    fn test_render_other_error() {
        let error = PipeRunApiError::Transport("connection reset".to_string());
        assert_eq!(
            render_error(&error, Subject::Activities),
            "Erro ao processar requisição: Transport error: connection reset"
        );
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(activity_not_found(42), "Atividade com ID 42 não encontrada.");
        assert_eq!(
            no_activities_of_type("call"),
            "Nenhuma atividade do tipo 'call' encontrada."
        );
        assert_eq!(
            no_activities_for_user(3),
            "Nenhuma atividade encontrada para o usuário com ID 3."
        );
    }
}
