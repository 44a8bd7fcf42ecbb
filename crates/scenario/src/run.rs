use crate::error::ScenarioError;
use crate::model::{SCENARIO_FORMAT_V1, Scenario, StepDef, from_json, from_toml, parse_mode};
use dom::{Element, Snapshot, SnapshotOptions};
use props::{PropertyReconciler, UrlSchemeGate, Value, VirtualNode, WriteMode, gate_fn};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Set,
    Remove,
}

/// A validated step, ready to replay.
#[derive(Clone, Debug)]
pub struct Step {
    pub op: Op,
    pub name: String,
    pub value: Value,
    pub mode: WriteMode,
    pub vnode: VirtualNode,
}

/// Final element state plus every host call, in order.
#[derive(Debug)]
pub struct Outcome {
    pub element: Element,
    /// One `path: mutation` line per journaled call.
    pub journal: Vec<String>,
}

impl Outcome {
    pub fn snapshot(&self, options: SnapshotOptions) -> Snapshot {
        Snapshot::new(&self.element, options)
    }
}

impl Scenario {
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(text)?;
        match scenario.format.as_deref() {
            Some(SCENARIO_FORMAT_V1) => Ok(scenario),
            other => Err(ScenarioError::UnsupportedFormat {
                found: other.map(str::to_string),
            }),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn default_mode(&self) -> Result<WriteMode, ScenarioError> {
        self.mode
            .as_deref()
            .map_or(Ok(WriteMode::Attributes), parse_mode)
    }

    pub fn reconciler(&self) -> PropertyReconciler {
        match &self.gate {
            Some(def) if !def.enabled => {
                PropertyReconciler::new().with_gate(gate_fn(|_, _, _, _| true))
            }
            Some(def) => PropertyReconciler::new().with_gate(UrlSchemeGate::new(def.config())),
            None => PropertyReconciler::new(),
        }
    }

    /// Validates every step up front, so a bad step leaves nothing applied.
    pub fn steps(&self) -> Result<Vec<Step>, ScenarioError> {
        let default_mode = self.default_mode()?;
        self.steps
            .iter()
            .enumerate()
            .map(|(index, def)| resolve_step(index + 1, def, &self.element.tag, default_mode))
            .collect()
    }

    pub fn run(&self) -> Result<Outcome, ScenarioError> {
        let steps = self.steps()?;
        let reconciler = self.reconciler();
        let mut element = self.element.build();
        let mut journal = Vec::new();
        for (index, step) in steps.iter().enumerate() {
            log::debug!(
                target: "scenario",
                "step {}: {:?} {} = {} ({:?})",
                index + 1,
                step.op,
                step.name,
                step.value,
                step.mode
            );
            apply_step(&reconciler, &mut element, step);
            drain_journal(&mut element, element_label(&self.element.tag, None), &mut journal);
        }
        Ok(Outcome { element, journal })
    }
}

pub fn apply_step(reconciler: &PropertyReconciler, element: &mut Element, step: &Step) {
    match step.op {
        Op::Set => reconciler.set_property(&step.vnode, element, &step.name, &step.value, step.mode),
        Op::Remove => reconciler.remove_property(&step.vnode, element, &step.name, step.mode),
    }
}

fn resolve_step(
    index: usize,
    def: &StepDef,
    root_tag: &str,
    default_mode: WriteMode,
) -> Result<Step, ScenarioError> {
    let op = match def.op.as_str() {
        "set" => Op::Set,
        "remove" => Op::Remove,
        other => {
            return Err(ScenarioError::UnknownOp {
                step: index,
                op: other.to_string(),
            });
        }
    };
    let value = match (&def.value, &def.json) {
        (Some(_), Some(_)) => return Err(ScenarioError::ConflictingValue { step: index }),
        (Some(value), None) => from_toml(value),
        (None, Some(raw)) => {
            let parsed: serde_json::Value = serde_json::from_str(raw)
                .map_err(|source| ScenarioError::Json { step: index, source })?;
            from_json(&parsed)
        }
        (None, None) => Value::Undefined,
    };
    let mode = match def.mode.as_deref() {
        Some(raw) => parse_mode(raw)?,
        None => default_mode,
    };
    let vnode = VirtualNode::new(def.vnode_tag.as_deref().unwrap_or(root_tag));
    Ok(Step {
        op,
        name: def.name.clone(),
        value,
        mode,
        vnode,
    })
}

fn element_label(tag: &str, parent: Option<(&str, usize)>) -> String {
    match parent {
        Some((parent, index)) => format!("{parent} > {tag}[{index}]"),
        None => tag.to_string(),
    }
}

// Pre-order, so a step's root writes precede its child writes.
fn drain_journal(element: &mut Element, label: String, out: &mut Vec<String>) {
    for mutation in element.take_journal() {
        out.push(format!("{label}: {mutation}"));
    }
    for (index, child) in element.children_mut().iter_mut().enumerate() {
        let child_label = element_label(child.tag(), Some((label.as_str(), index)));
        drain_journal(child, child_label, out);
    }
}
