//! Reusable model fixtures.
//!
//! All fixtures use the `tick` message type and `f32` time representation
//! so signatures stay short and predictable in expected-output tests:
//!
//! - [`tick_generator`] — one output port, no inputs.
//! - [`tick_sink`] — one input port, no outputs.
//! - [`tick_relay`] — one input, one output.
//! - [`silent`] — no ports at all.
//! - [`generator_shell`] — a generator coupled to one external output.
//! - [`relay_pipeline`] — two relays exercising EIC, IC, and EOC at once.
//! - [`empty_shell`] — a coupled model with no ports, submodels, or couplings.
//! - [`nested_shell`] — `levels` coupled shells around a [`generator_shell`].

use limn_model::{AtomicBuilder, AtomicModel, CoupledBuilder, CoupledModel, ModelName};

/// Atomic model emitting `tick` messages on its single output port.
///
/// Mirrors the classic generator example: no inputs, one output named
/// `tick_out` carrying `tick`.
pub fn tick_generator() -> AtomicModel {
    AtomicBuilder::new(ModelName::parameterized("tick_generator", ["f32"]))
        .output("tick_out", "tick")
        .build()
        .expect("fixture is well-formed")
}

/// Atomic model consuming `tick` messages on its single input port.
pub fn tick_sink() -> AtomicModel {
    AtomicBuilder::new(ModelName::parameterized("tick_sink", ["f32"]))
        .input("tick_in", "tick")
        .build()
        .expect("fixture is well-formed")
}

/// Atomic model with one input and one output, both carrying `tick`.
pub fn tick_relay() -> AtomicModel {
    AtomicBuilder::new(ModelName::parameterized("tick_relay", ["f32"]))
        .input("in", "tick")
        .output("out", "tick")
        .build()
        .expect("fixture is well-formed")
}

/// Atomic model with no ports in either direction.
pub fn silent() -> AtomicModel {
    AtomicBuilder::new(ModelName::parameterized("silent", ["f32"]))
        .build()
        .expect("fixture is well-formed")
}

/// Coupled model holding one [`tick_generator`], its output wired to the
/// shell's own `out` port by a single external-output coupling.
pub fn generator_shell() -> CoupledModel {
    let mut shell = CoupledBuilder::new(ModelName::parameterized("generator_shell", ["f32"]))
        .output("out", "tick");
    let generator = shell.add_submodel(tick_generator());
    shell
        .external_output(generator, "tick_out", "out")
        .build()
        .expect("fixture is well-formed")
}

/// Coupled model chaining two [`tick_relay`]s, exercising all three
/// coupling relations: EIC into the first relay, an IC between the
/// relays, and an EOC out of the second.
pub fn relay_pipeline() -> CoupledModel {
    let mut pipeline = CoupledBuilder::new(ModelName::parameterized("relay_pipeline", ["f32"]))
        .input("in", "tick")
        .output("out", "tick");
    let first = pipeline.add_submodel(tick_relay());
    let second = pipeline.add_submodel(tick_relay());
    pipeline
        .external_input("in", first, "in")
        .internal(first, "out", second, "in")
        .external_output(second, "out", "out")
        .build()
        .expect("fixture is well-formed")
}

/// Coupled model with no ports, no submodels, and no couplings.
pub fn empty_shell() -> CoupledModel {
    CoupledBuilder::new(ModelName::parameterized("empty_shell", ["f32"]))
        .build()
        .expect("fixture is well-formed")
}

/// Wrap a [`generator_shell`] in `levels` additional coupled shells.
///
/// Each level declares an `out` port fed by its inner model's `out`
/// port, so `nested_shell(0)` is just the generator shell and
/// `nested_shell(n)` is a chain of `n + 1` coupled nodes over the
/// atomic generator. Used by depth-truncation tests.
pub fn nested_shell(levels: u32) -> CoupledModel {
    let mut model = generator_shell();
    for _ in 0..levels {
        let mut shell =
            CoupledBuilder::new(ModelName::parameterized("nest", ["f32"])).output("out", "tick");
        let inner = shell.add_submodel(model);
        model = shell
            .external_output(inner, "out", "out")
            .build()
            .expect("fixture is well-formed");
    }
    model
}
