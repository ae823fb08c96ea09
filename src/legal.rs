//! Legal Texts
//!
//! Titles and Markdown bodies shown by the legal modal.

use crate::markdown::parse_markdown;
use crate::models::ModalKind;

const TERMS: &str = "\
### 1. Aceitação dos Termos
Ao utilizar nossos serviços, você concorda com estes termos de uso.

### 2. Serviços Prestados
Oferecemos acompanhamento social profissional para eventos e ocasiões especiais.

### 3. Conduta do Usuário
É exigido comportamento respeitoso e apropriado em todos os encontros.
";

const PRIVACY: &str = "\
### 1. Coleta de Informações
Coletamos apenas informações necessárias para fornecer nossos serviços.

### 2. Uso de Dados
Seus dados são utilizados apenas para melhorar sua experiência.

### 3. Segurança
Implementamos medidas rigorosas para proteger suas informações.
";

const SECURITY: &str = "\
### 1. Verificação
Todos os profissionais passam por rigoroso processo de verificação.

### 2. Confidencialidade
Garantimos total discrição em todos os serviços prestados.

### 3. Suporte
Equipe de suporte disponível %o%24/7%o% para emergências.
";

const UNAVAILABLE: &str = "Conteúdo não disponível.";

pub fn title(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Terms => "Termos de Uso",
        ModalKind::Privacy => "Política de Privacidade",
        ModalKind::Security => "Política de Segurança",
        ModalKind::Other => "Termos e Condições",
    }
}

pub fn source(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Terms => TERMS,
        ModalKind::Privacy => PRIVACY,
        ModalKind::Security => SECURITY,
        ModalKind::Other => UNAVAILABLE,
    }
}

/// Rendered HTML body for `kind`
pub fn body_html(kind: ModalKind) -> String {
    parse_markdown(source(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_three_sections() {
        for kind in [ModalKind::Terms, ModalKind::Privacy, ModalKind::Security] {
            let html = body_html(kind);
            assert_eq!(html.matches("<h3>").count(), 3, "{:?}", kind);
            assert_eq!(html.matches("<p>").count(), 3, "{:?}", kind);
        }
    }

    #[test]
    fn test_fallback_content() {
        assert_eq!(title(ModalKind::from_tag("cookies")), "Termos e Condições");
        assert_eq!(body_html(ModalKind::Other), "<p>Conteúdo não disponível.</p>\n");
    }

    #[test]
    fn test_security_highlights_support_hours() {
        assert!(body_html(ModalKind::Security).contains("<span style=\"color: var(--jc-orange)\">24/7</span>"));
    }
}
