//! allOf inheritance flattening.
//!
//! Swift structs cannot inherit, so every model must carry the fields of all
//! of its ancestors itself. This module copies each ancestor's fully
//! flattened fields into its descendants, deduplicated by field name.
//!
//! Precedence when a name is seen more than once: the model's own fields
//! come first, then each ancestor in `ancestor_names` order, each ancestor
//! contributing its own flattened list in the same order. The first instance
//! of a name wins and later ones are dropped.

use crate::error::CodegenError;
use boat_swift_model::{DanglingAncestor, Field, Model, ModelGraph, TypeDescriptor};
use std::collections::{BTreeSet, HashMap};

/// Two inherited fields sharing a name but not a type.
///
/// Resolved by precedence and reported for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConflict {
    /// Model receiving the fields.
    pub model: String,
    /// Field name.
    pub field: String,
    /// Type of the retained instance.
    pub kept: TypeDescriptor,
    /// Type of the dropped instance.
    pub dropped: TypeDescriptor,
    /// Ancestor the dropped instance came through.
    pub dropped_from: String,
}

/// Diagnostics collected while flattening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenReport {
    /// Ancestor names that were skipped because no such model exists.
    pub dangling: Vec<DanglingAncestor>,
    /// Same-name fields with different types, resolved by precedence.
    pub conflicts: Vec<FieldConflict>,
}

impl FlattenReport {
    /// Returns true if nothing noteworthy happened.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.conflicts.is_empty()
    }
}

/// A flattened graph together with its diagnostics.
#[derive(Debug, Clone)]
pub struct Flattened {
    /// The flattened graph.
    pub graph: ModelGraph,
    /// Diagnostics.
    pub report: FlattenReport,
}

/// Flattens every model in `graph`, returning a new graph.
///
/// # Errors
/// Returns `CodegenError::CyclicInheritance` if the ancestry contains a cycle.
pub fn flatten(graph: &ModelGraph) -> Result<ModelGraph, CodegenError> {
    Ok(Flattener::new(graph).flatten()?.graph)
}

/// Flattens every model in `graph` in place.
///
/// The graph is left untouched when an error is returned.
///
/// # Errors
/// Returns `CodegenError::CyclicInheritance` if the ancestry contains a cycle.
pub fn flatten_in_place(graph: &mut ModelGraph) -> Result<FlattenReport, CodegenError> {
    let flattened = Flattener::new(graph).flatten()?;
    *graph = flattened.graph;
    Ok(flattened.report)
}

/// Fields in insertion order, unique by name.
#[derive(Debug, Default)]
struct FieldSet {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl FieldSet {
    /// Appends `field` unless its name is taken, in which case the instance
    /// already present is returned.
    fn insert(&mut self, field: Field) -> Option<&Field> {
        if let Some(&idx) = self.index.get(&field.name) {
            return Some(&self.fields[idx]);
        }
        self.index.insert(field.name.clone(), self.fields.len());
        self.fields.push(field);
        None
    }

    fn into_vec(self) -> Vec<Field> {
        self.fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

#[derive(Debug, Clone)]
struct Resolved {
    fields: Vec<Field>,
    required: BTreeSet<String>,
}

/// A model whose ancestors are still being merged.
struct Frame<'a> {
    model: &'a Model,
    next_ancestor: usize,
    fields: FieldSet,
    required: BTreeSet<String>,
}

/// Depth-first flattening pass over one model graph.
///
/// The descent keeps its own stack of in-progress models, so ancestor chains
/// of any depth are handled without growing the call stack.
pub struct Flattener<'a> {
    graph: &'a ModelGraph,
    visits: HashMap<&'a str, Visit>,
    path: Vec<&'a str>,
    resolved: HashMap<&'a str, Resolved>,
    report: FlattenReport,
}

impl<'a> Flattener<'a> {
    /// Creates a new flattener over `graph`.
    #[must_use]
    pub fn new(graph: &'a ModelGraph) -> Self {
        Self {
            graph,
            visits: HashMap::new(),
            path: Vec::new(),
            resolved: HashMap::new(),
            report: FlattenReport::default(),
        }
    }

    /// Flattens every model, consuming the flattener.
    ///
    /// # Errors
    /// Returns `CodegenError::CyclicInheritance` if the ancestry contains a
    /// cycle.
    pub fn flatten(mut self) -> Result<Flattened, CodegenError> {
        let graph = self.graph;
        for model in graph.models() {
            self.resolve(model)?;
        }

        let mut out = ModelGraph::new();
        for model in graph.models() {
            let mut flat = model.clone();
            if let Some(resolved) = self.resolved.remove(model.name.as_str()) {
                flat.fields = resolved.fields;
                flat.required_field_names = resolved.required;
            }
            out.insert(flat);
        }

        Ok(Flattened {
            graph: out,
            report: self.report,
        })
    }

    fn resolve(&mut self, root: &'a Model) -> Result<(), CodegenError> {
        if self.visits.contains_key(root.name.as_str()) {
            return Ok(());
        }

        let mut stack = vec![self.enter(root)];
        while let Some(frame) = stack.last_mut() {
            let model = frame.model;
            let Some(ancestor) = model.ancestor_names.get(frame.next_ancestor) else {
                if let Some(done) = stack.pop() {
                    self.leave(done);
                }
                continue;
            };

            let Some(parent) = self.graph.get(ancestor) else {
                tracing::warn!(
                    "Model {} lists unknown ancestor {}, skipping",
                    model.name,
                    ancestor
                );
                self.report.dangling.push(DanglingAncestor {
                    model: model.name.clone(),
                    ancestor: ancestor.clone(),
                });
                frame.next_ancestor += 1;
                continue;
            };

            match self.visits.get(parent.name.as_str()).copied() {
                Some(Visit::Done) => {
                    self.merge(frame, ancestor);
                    frame.next_ancestor += 1;
                }
                Some(Visit::InProgress) => return Err(self.cycle_through(&parent.name)),
                None => {
                    let entered = self.enter(parent);
                    stack.push(entered);
                }
            }
        }
        Ok(())
    }

    /// Marks `model` in progress and seeds it with its own fields.
    fn enter(&mut self, model: &'a Model) -> Frame<'a> {
        self.visits.insert(model.name.as_str(), Visit::InProgress);
        self.path.push(model.name.as_str());

        let mut fields = FieldSet::default();
        for field in &model.fields {
            fields.insert(field.clone());
        }
        Frame {
            model,
            next_ancestor: 0,
            fields,
            required: model.required_field_names.clone(),
        }
    }

    /// Appends the flattened fields of `ancestor` to `frame`.
    fn merge(&mut self, frame: &mut Frame<'a>, ancestor: &str) {
        let Some(inherited) = self.resolved.get(ancestor) else {
            return;
        };
        for field in &inherited.fields {
            match frame.fields.insert(field.clone()) {
                None => {
                    if inherited.required.contains(&field.name) {
                        frame.required.insert(field.name.clone());
                    }
                }
                Some(kept) if kept.type_descriptor != field.type_descriptor => {
                    tracing::debug!(
                        "Model {}: field {} inherited from {} shadowed by earlier instance",
                        frame.model.name,
                        field.name,
                        ancestor
                    );
                    self.report.conflicts.push(FieldConflict {
                        model: frame.model.name.clone(),
                        field: field.name.clone(),
                        kept: kept.type_descriptor.clone(),
                        dropped: field.type_descriptor.clone(),
                        dropped_from: ancestor.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    /// Records a fully merged model.
    fn leave(&mut self, frame: Frame<'a>) {
        let name = frame.model.name.as_str();
        let fields = frame.fields.into_vec();
        tracing::debug!(
            "Model {} flattened: {} own fields, {} total",
            name,
            frame.model.fields.len(),
            fields.len()
        );

        self.path.pop();
        self.visits.insert(name, Visit::Done);
        self.resolved.insert(
            name,
            Resolved {
                fields,
                required: frame.required,
            },
        );
    }

    /// Builds the error for re-entering the in-progress model `name`.
    fn cycle_through(&self, name: &str) -> CodegenError {
        let start = self.path.iter().position(|n| *n == name).unwrap_or(0);
        let mut cycle: Vec<&str> = self.path[start..].to_vec();
        cycle.push(name);
        CodegenError::cyclic(cycle)
    }
}
