use serde::Serialize;

/// 欄位對應規則：主要欄位優先，依序退回備援欄位，結果寫入目標欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    pub primary: &'static str,
    pub fallbacks: &'static [&'static str],
    pub target: &'static str,
}

impl FieldRule {
    /// Source columns in priority order, primary first.
    pub fn sources(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.primary).chain(self.fallbacks.iter().copied())
    }
}

/// Delivery address fields: address, number, postal code, neighborhood.
pub const DELIVERY_ADDRESS_RULES: [FieldRule; 4] = [
    FieldRule {
        primary: "Endereço Entrega",
        fallbacks: &["Endereço"],
        target: "Endereço Unificado",
    },
    FieldRule {
        primary: "Número Entrega",
        fallbacks: &["Número Número Entrega", "Número"],
        target: "Número Unificado",
    },
    FieldRule {
        primary: "CEP Entrega",
        fallbacks: &["CEP"],
        target: "CEP Unificado",
    },
    FieldRule {
        primary: "Nome Bai. Entrega",
        fallbacks: &["Nome do Bairro"],
        target: "Bairro Unificado",
    },
];

/// Default file name offered by the save prompt.
pub const SUGGESTED_OUTPUT_NAME: &str = "planilha_com_colunas_unificadas.xlsx";
