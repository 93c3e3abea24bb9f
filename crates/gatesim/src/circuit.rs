use crate::engine;
use crate::error::GateError;
use crate::gate::{Gate, GateKind};
use crate::ids::{GateId, NetId, NodeRef, PadId};
use crate::net::Net;
use crate::pad::{Pad, PadKind};
use crate::pad_state::PadState;
use crate::value::Value;
use crate::vector::Vector;
use crate::HashMap;

/// Owning container of every net, gate, and pad in one circuit.
///
/// Breaks the otherwise mutually-referencing net/gate/pad graph by
/// holding each kind in its own arena and letting every cross-reference
/// be a stable index ([`NetId`]/[`GateId`]/[`PadId`]) rather than an
/// owning pointer. The graph is built up front (via `add_gate`/
/// `add_in_pad`/`add_out_pad`) and is not mutated once a [`Vector`] is
/// attached and `run` begins.
#[derive(Debug, Clone)]
pub struct Circuit {
    id: String,
    nets: Vec<Net>,
    net_index: HashMap<String, NetId>,
    gates: Vec<Gate>,
    gate_index: HashMap<String, GateId>,
    pads: Vec<Pad>,
    pad_index: HashMap<String, PadId>,
    in_pads: Vec<PadId>,
    out_pads: Vec<PadId>,
    vector: Option<Vector>,
    logical_time: i64,
}

impl Circuit {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nets: Vec::new(),
            net_index: HashMap::default(),
            gates: Vec::new(),
            gate_index: HashMap::default(),
            pads: Vec::new(),
            pad_index: HashMap::default(),
            in_pads: Vec::new(),
            out_pads: Vec::new(),
            vector: None,
            logical_time: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn logical_time(&self) -> i64 {
        self.logical_time
    }

    pub(crate) fn net(&self, id: NetId) -> &Net {
        &self.nets[id.0]
    }

    pub(crate) fn net_mut(&mut self, id: NetId) -> &mut Net {
        &mut self.nets[id.0]
    }

    pub(crate) fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.0]
    }

    pub(crate) fn gate_mut(&mut self, id: GateId) -> &mut Gate {
        &mut self.gates[id.0]
    }

    pub(crate) fn pad(&self, id: PadId) -> &Pad {
        &self.pads[id.0]
    }

    pub(crate) fn pad_mut(&mut self, id: PadId) -> &mut Pad {
        &mut self.pads[id.0]
    }

    pub fn net_by_name(&self, id: &str) -> Option<&Net> {
        self.net_index.get(id).map(|&i| &self.nets[i.0])
    }

    pub fn gate_by_name(&self, id: &str) -> Option<&Gate> {
        self.gate_index.get(id).map(|&i| &self.gates[i.0])
    }

    pub fn pad_by_name(&self, id: &str) -> Option<&Pad> {
        self.pad_index.get(id).map(|&i| &self.pads[i.0])
    }

    pub fn in_pads(&self) -> &[PadId] {
        &self.in_pads
    }

    pub fn out_pads(&self) -> &[PadId] {
        &self.out_pads
    }

    pub fn vector(&self) -> Option<&Vector> {
        self.vector.as_ref()
    }

    pub(crate) fn take_vector(&mut self) -> Option<Vector> {
        self.vector.take()
    }

    pub(crate) fn put_vector(&mut self, vector: Vector) {
        self.vector = Some(vector);
    }

    /// Builds an empty vector pre-populated with one PadState per pad of
    /// this circuit, inputs first then outputs (section 3's ordering
    /// contract). Stimulus parsing schedules values onto the returned
    /// vector's input PadStates and then calls `attach_vector`.
    pub fn build_vector(&self, id: impl Into<String>) -> Vector {
        let mut vector = Vector::new(id);
        for &pad in &self.in_pads {
            let p = &self.pads[pad.0];
            vector.push(PadState::new(p.id(), PadKind::In, pad, Value::X));
        }
        for &pad in &self.out_pads {
            let p = &self.pads[pad.0];
            vector.push(PadState::new(p.id(), PadKind::Out, pad, Value::X));
        }
        vector
    }

    /// Attaches a vector, checking the bijection invariant of section 3:
    /// every IN-Pad and OUT-Pad of this circuit must have exactly one
    /// matching PadState, and the vector may not name a pad this circuit
    /// doesn't have.
    pub fn attach_vector(&mut self, vector: Vector) -> Result<(), GateError> {
        for &pad in self.in_pads.iter().chain(self.out_pads.iter()) {
            let name = self.pads[pad.0].id();
            if vector.pad_state(name).is_none() {
                return Err(GateError::ElementNotFound {
                    kind: "pad-state",
                    id: name.to_string(),
                });
            }
        }
        for state in vector.pad_states() {
            if !self.pad_index.contains_key(state.id()) {
                return Err(GateError::SchemaMismatch {
                    pad: state.id().to_string(),
                });
            }
        }
        self.vector = Some(vector);
        Ok(())
    }

    /// Returns the id of the net named `id`, creating it with a default
    /// `X` value on first reference (section 3's lazy net creation).
    pub fn get_or_create_net(&mut self, id: &str) -> NetId {
        if let Some(&existing) = self.net_index.get(id) {
            return existing;
        }
        let net_id = NetId(self.nets.len());
        self.nets.push(Net::new(id));
        self.net_index.insert(id.to_string(), net_id);
        net_id
    }

    /// Adds a gate, linking it to its input and output nets symmetrically
    /// (driver side and reader side). `NOT`'s fixed arity is checked
    /// eagerly here since it is a basic shape error, not the "incremental
    /// wiring not finished yet" case `Gate::validate` defers to first
    /// evaluation.
    pub fn add_gate(
        &mut self,
        kind: GateKind,
        id: impl Into<String>,
        delay: u32,
        input_net_ids: &[&str],
        output_net_id: &str,
    ) -> Result<GateId, GateError> {
        let id = id.into();
        if id.is_empty() {
            return Err(GateError::MissingId { what: "gate" });
        }
        if let Some(expected) = kind.exact_arity() {
            if input_net_ids.len() != expected {
                return Err(GateError::InvalidArity {
                    gate: id,
                    kind: kind.name(),
                    expected: "exactly 1",
                    actual: input_net_ids.len(),
                });
            }
        }

        let gate_id = GateId(self.gates.len());
        let inputs: Vec<NetId> = input_net_ids
            .iter()
            .map(|n| self.get_or_create_net(n))
            .collect();
        let output = self.get_or_create_net(output_net_id);

        self.gates.push(Gate::new(id.clone(), kind, delay, inputs.clone(), Some(output)));
        self.gate_index.insert(id, gate_id);

        for net in inputs {
            self.nets[net.0].add_reader(NodeRef::Gate(gate_id));
        }
        self.nets[output.0].set_driver(NodeRef::Gate(gate_id));

        Ok(gate_id)
    }

    pub fn add_in_pad(&mut self, pad_id: impl Into<String>, net_id: &str) -> Result<PadId, GateError> {
        let pad_id_str = pad_id.into();
        if pad_id_str.is_empty() {
            return Err(GateError::MissingId { what: "pad" });
        }
        let net = self.get_or_create_net(net_id);
        let id = PadId(self.pads.len());
        self.pads.push(Pad::new(pad_id_str.clone(), PadKind::In, net));
        self.pad_index.insert(pad_id_str, id);
        self.nets[net.0].set_driver(NodeRef::Pad(id));
        self.in_pads.push(id);
        Ok(id)
    }

    pub fn add_out_pad(&mut self, pad_id: impl Into<String>, net_id: &str) -> Result<PadId, GateError> {
        let pad_id_str = pad_id.into();
        if pad_id_str.is_empty() {
            return Err(GateError::MissingId { what: "pad" });
        }
        let net = self.get_or_create_net(net_id);
        let id = PadId(self.pads.len());
        self.pads.push(Pad::new(pad_id_str.clone(), PadKind::Out, net));
        self.pad_index.insert(pad_id_str, id);
        self.nets[net.0].add_reader(NodeRef::Pad(id));
        self.out_pads.push(id);
        Ok(id)
    }

    /// Advances the simulation by a single tick, applying this tick's
    /// scheduled input values and recording this tick's output samples.
    pub fn tick(&mut self, t: i64) -> Result<(), GateError> {
        engine::tick_vector(self, t)
    }

    /// Computes the simulation horizon: the attached vector's longest
    /// input schedule plus the longest combinational delay path.
    pub fn trace(&mut self) -> Result<i64, GateError> {
        engine::trace_vector(self)
    }

    /// Runs the full simulation, ticking `t = 0 ..= horizon`.
    pub fn run(&mut self, horizon: i64) -> Result<(), GateError> {
        if horizon < 1 {
            return Err(GateError::NegativeRange {
                what: "horizon",
                value: horizon,
            });
        }
        if self.vector.is_none() {
            return Err(GateError::NullReference {
                what: "circuit".to_string(),
                reference: "vector",
            });
        }
        for t in 0..=horizon {
            self.tick(t)?;
            self.logical_time = t;
        }
        Ok(())
    }
}
