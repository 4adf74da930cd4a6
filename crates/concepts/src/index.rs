//! The static concept title index
//!
//! Maps display titles (as shown in the curriculum) to canonical
//! concept identifiers. Identifiers carry one namespace prefix per
//! subject domain; the prefix set is closed.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Recognized identifier namespace prefixes, one per subject domain
pub const NAMESPACE_PREFIXES: &[&str] = &[
    "java-",
    "javascript-",
    "python-",
    "html-",
    "css-",
    "sql-",
];

static CONCEPT_TITLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Java
        ("Introdução ao Java", "java-intro"),
        ("Variáveis e Tipos", "java-variables"),
        ("Operadores", "java-operators"),
        ("Estruturas de Controle", "java-control-flow"),
        ("Laços de Repetição", "java-loops"),
        ("Vetores e Matrizes", "java-arrays"),
        ("Orientação a Objetos", "java-oop-basics"),
        ("Classes e Objetos", "java-oop-classes"),
        ("Herança", "java-oop-inheritance"),
        ("Polimorfismo", "java-oop-polymorphism"),
        ("Encapsulamento", "java-oop-encapsulation"),
        ("Interfaces", "java-oop-interfaces"),
        ("Tratamento de Exceções", "java-exceptions"),
        ("Coleções", "java-collections"),
        // JavaScript
        ("Introdução ao JavaScript", "javascript-intro"),
        ("Funções", "javascript-functions"),
        ("Arrays e Objetos", "javascript-arrays-objects"),
        ("Manipulação do DOM", "javascript-dom"),
        ("Eventos", "javascript-events"),
        ("Promises e Async", "javascript-async"),
        // Python
        ("Introdução ao Python", "python-intro"),
        ("Estruturas de Dados", "python-data-structures"),
        ("Módulos e Pacotes", "python-modules"),
        ("Compreensão de Listas", "python-comprehensions"),
        // HTML
        ("Estrutura de uma Página", "html-structure"),
        ("Formulários", "html-forms"),
        ("Tabelas", "html-tables"),
        ("Semântica", "html-semantics"),
        // CSS
        ("Seletores", "css-selectors"),
        ("Box Model", "css-box-model"),
        ("Flexbox", "css-flexbox"),
        ("Grid Layout", "css-grid"),
        // SQL
        ("Consultas Básicas", "sql-select"),
        ("Junções", "sql-joins"),
        ("Agregações", "sql-aggregations"),
    ])
});

/// Look up a display title in the static table
///
/// Pure exact-match lookup; returns `None` for titles outside the
/// table.
///
/// # Examples
///
/// ```
/// use devroad_concepts::concept_id_from_title;
///
/// assert_eq!(concept_id_from_title("Herança"), Some("java-oop-inheritance"));
/// assert_eq!(concept_id_from_title("Unknown"), None);
/// ```
pub fn concept_id_from_title(title: &str) -> Option<&'static str> {
    CONCEPT_TITLES.get(title).copied()
}
