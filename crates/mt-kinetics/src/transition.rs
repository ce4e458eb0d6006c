//! The chemical Markov step over the occupancy ladder.

use mt_core::{MotorResult, MotorState, SimRng};

use crate::RateModel;

/// Advance the occupancy state by one timestep.
///
/// `k_on`/`k_off` are the per-site rate constants for states `1..=K`
/// (entry `k − 1` belongs to state `k`); their shared length declares the
/// state-space size.  One uniform draw `p ∈ [0, 1)` is partitioned into
/// consecutive intervals evaluated unbind → bind → remain, with inclusive
/// membership (`p <= threshold`) and first match winning:
///
/// - state 0: bind with `Pon₁` → 1, else remain.
/// - state k (1..K−1): `p <= Poff` → k−1; else `p <= Poff + Pon` → k+1;
///   else remain.
/// - terminal K: only the unbind interval applies.
///
/// `adp_released` selects the kinetic branch.  The base branch governs an
/// occupied first site: state k unbinds at `Koff_k` and binds the next
/// site at force-assisted `Kon_{k+1}`.  The emptied-site branch shifts the
/// off rate one rung up (`Koff_{k+1}`; the terminal state keeps `Koff_K`)
/// and folds all binding back onto the force-free first-site rate.
pub fn advance_occupancy(
    state:        MotorState,
    adp_released: bool,
    force:        f64,
    k_on:         &[f64],
    k_off:        &[f64],
    rates:        &RateModel<'_>,
    rng:          &mut SimRng,
) -> MotorResult<MotorState> {
    debug_assert_eq!(k_on.len(), k_off.len());
    let terminal = MotorState(k_on.len() as u8);
    state.check_domain(terminal)?;

    let p = rng.uniform();

    if state == MotorState::UNBOUND {
        let p_on = rates.p_bind_first(k_on[0])?;
        return Ok(if p <= p_on { MotorState(1) } else { state });
    }

    let k = state.index();
    let off_idx = if adp_released { k.min(k_off.len() - 1) } else { k - 1 };
    let p_off = rates.p_unbind(k_off[off_idx])?;
    if p <= p_off {
        return Ok(MotorState(state.0 - 1));
    }

    if state < terminal {
        let p_on = if adp_released {
            rates.p_bind_first(k_on[0])?
        } else {
            rates.p_bind_assisted(k_on[k], force)?
        };
        if p <= p_off + p_on {
            return Ok(MotorState(state.0 + 1));
        }
    }

    Ok(state)
}
