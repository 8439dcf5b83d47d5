//! Symbolic names for ids.
//!
//! An alias is `@` followed by the identifier prefix of the id's `OpName`, or
//! `@N` when the id has no debug name. Aliases are unique within one
//! [`Aliases`] context: a later id asking for a taken alias gets a numeric
//! suffix.

use indexmap::IndexMap;
use spvil_core::utils::{identifier_prefix, strip_quotes};
use spvil_core::{DiagnosticKind, Diagnostics, Id, Module, Operand, Section};

use crate::TextError;

/// Alias cache for one text pass.
#[derive(Debug)]
pub struct Aliases<'m> {
    module: &'m Module,
    id_to_alias: IndexMap<Id, String>,
    alias_to_id: IndexMap<String, Id>,
    diagnostics: Diagnostics,
}

impl<'m> Aliases<'m> {
    pub fn new(module: &'m Module) -> Self {
        Self {
            module,
            id_to_alias: IndexMap::new(),
            alias_to_id: IndexMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Alias of `id`, resolving and caching it on first use.
    pub fn resolve(&mut self, id: Id) -> Result<String, TextError> {
        if let Some(alias) = self.id_to_alias.get(&id) {
            return Ok(alias.clone());
        }

        let base = match self.debug_name(id) {
            Some(name) => self.symbol(id, name)?.to_string(),
            None => id.get().to_string(),
        };
        let mut alias = format!("@{base}");
        if let Some(&owner) = self.alias_to_id.get(&alias) {
            let mut n = 1;
            let mut candidate = format!("@{base}_{n}");
            while self.alias_to_id.contains_key(&candidate) {
                n += 1;
                candidate = format!("@{base}_{n}");
            }
            log::warn!("{alias} already names {owner}, using {candidate} for {id}");
            self.diagnostics
                .report(DiagnosticKind::DuplicateSymbolName)
                .message(format!(
                    "symbol name \"{alias}\" is already used by {owner}, renamed {id} to \"{candidate}\""
                ))
                .id(id)
                .emit();
            alias = candidate;
        }

        self.id_to_alias.insert(id, alias.clone());
        self.alias_to_id.insert(alias.clone(), id);
        Ok(alias)
    }

    /// Previously resolved alias, without resolving.
    pub fn cached(&self, id: Id) -> Option<&str> {
        self.id_to_alias.get(&id).map(String::as_str)
    }

    /// The id an alias was handed out to.
    pub fn id_of(&self, alias: &str) -> Option<Id> {
        self.alias_to_id.get(alias).copied()
    }

    pub fn len(&self) -> usize {
        self.id_to_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_alias.is_empty()
    }

    /// Resolved aliases in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &str)> {
        self.id_to_alias
            .iter()
            .map(|(&id, alias)| (id, alias.as_str()))
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn debug_name(&self, id: Id) -> Option<&'m str> {
        self.module
            .section(Section::Debug)
            .iter()
            .filter(|inst| inst.is("OpName"))
            .find(|inst| inst.operands.first().and_then(Operand::as_id) == Some(id))
            .and_then(|inst| inst.operands.get(1))
            .and_then(Operand::as_str)
            .map(strip_quotes)
    }

    /// Identifier prefix of `name`, reporting a truncation.
    fn symbol(&mut self, id: Id, name: &'m str) -> Result<&'m str, TextError> {
        let prefix = identifier_prefix(name);
        if prefix.is_empty() {
            return Err(TextError::InvalidSymbolName {
                id,
                name: name.to_string(),
            });
        }
        if prefix.len() < name.len() {
            log::warn!("truncated symbol name {name:?} of {id} to {prefix:?}");
            self.diagnostics
                .report(DiagnosticKind::TruncatedSymbolName)
                .message(format!("truncated symbol name \"{name}\" to \"{prefix}\""))
                .id(id)
                .emit();
        }
        Ok(prefix)
    }
}
