//! Level-by-level DD+AR saturation

use super::{ApplicationState, ProofId, ProofState, StatementProof, TheoremApplication};
use crate::ar::{ArVar, Equation, LinearSystem, ReducedEquation};
use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::geometry::{Dist, Point, Problem, SinOrDist, SlopeAngle, SquaredDist};
use crate::matcher::TheoremMatcher;
use crate::numbers::{rat_to_nnrat, rat_to_string, NNRat, Rat};
use crate::statement::{RatioSquaredDist, SquaredDistEq, Statement};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{json, Value};
use tracing::{error, info};

/// One AR engine plus its reduction scratchpads.
///
/// Scratchpads are deduplicated by normalized equation, so statements with
/// the same algebraic content share one reduction.
struct ArTable<V: ArVar> {
    gate: bool,
    system: LinearSystem<V>,
    reduced: Vec<ReducedEquation<V>>,
    by_eqn: FxHashMap<Equation<V>, usize>,
}

impl<V: ArVar> ArTable<V> {
    fn new(gate: bool) -> Self {
        ArTable {
            gate,
            system: LinearSystem::new(),
            reduced: Vec::new(),
            by_eqn: FxHashMap::default(),
        }
    }

    fn register(&mut self, eq: Equation<V>) -> Option<(Rat, usize)> {
        if !self.gate {
            return None;
        }
        let (coeff, norm) = eq.normalize();
        let slot = match self.by_eqn.get(&norm) {
            Some(&s) => s,
            None => {
                let s = self.reduced.len();
                self.reduced.push(ReducedEquation::new(norm.clone()));
                self.by_eqn.insert(norm, s);
                s
            }
        };
        Some((coeff, slot))
    }

    fn reduce(&mut self, slot: usize) {
        let red = &mut self.reduced[slot];
        red.reduce(&self.system);
    }

    fn is_solved(&self, slot: usize) -> bool {
        self.reduced[slot].is_solved(&self.system)
    }

    fn add_to_system(&mut self, slot: usize, pf: ProofId) -> Result<()> {
        let red = &self.reduced[slot];
        self.system.add_equation(red, pf)
    }

    fn dependencies(&self, slot: usize) -> Vec<ProofId> {
        self.reduced[slot].dependencies(&self.system)
    }
}

/// The forward-chaining proof engine.
pub struct DdarSolver<'a> {
    problem: &'a Problem,
    config: SolverConfig,
    proofs: Vec<StatementProof>,
    by_statement: FxHashMap<Statement, ProofId>,
    applications: Vec<TheoremApplication>,
    established: Vec<ProofId>,
    goals: Vec<ProofId>,
    ratio_cache: FxHashSet<(SquaredDist, SquaredDist)>,
    ar_dist: ArTable<Dist>,
    ar_squared: ArTable<SquaredDist>,
    ar_ratio: ArTable<SinOrDist>,
    ar_angle: ArTable<SlopeAngle>,
    level: usize,
    solved: bool,
}

impl<'a> DdarSolver<'a> {
    pub fn new(problem: &'a Problem, config: SolverConfig) -> Result<Self> {
        let mut solver = DdarSolver {
            problem,
            config,
            proofs: Vec::new(),
            by_statement: FxHashMap::default(),
            applications: Vec::new(),
            established: Vec::new(),
            goals: Vec::new(),
            ratio_cache: FxHashSet::default(),
            ar_dist: ArTable::new(config.ar_dist_enabled),
            ar_squared: ArTable::new(config.ar_squared_enabled),
            ar_ratio: ArTable::new(true),
            ar_angle: ArTable::new(true),
            level: 0,
            solved: false,
        };

        info!("adding hypotheses");
        for hyp in problem.hypotheses() {
            let id = solver.insert_statement(hyp)?;
            solver.prove_by_assumption(id)?;
        }

        info!("matching theorems");
        let theorems = TheoremMatcher::run(problem, &config);
        for thm in theorems {
            solver.insert_theorem(thm)?;
        }

        if !problem.goals().is_empty() {
            info!("adding goals");
            for goal in problem.goals() {
                let id = solver.insert_statement(goal)?;
                solver.goals.push(id);
            }
        }
        Ok(solver)
    }

    pub fn num_theorems(&self) -> usize {
        self.applications.len()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn num_statements(&self) -> usize {
        self.proofs.len()
    }

    pub fn num_established(&self) -> usize {
        self.established.len()
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn proof(&self, id: ProofId) -> &StatementProof {
        &self.proofs[id.index()]
    }

    pub fn goals(&self) -> &[ProofId] {
        &self.goals
    }

    pub fn applications(&self) -> &[TheoremApplication] {
        &self.applications
    }

    /// Interns the statement's normalized form, creating a proof record
    /// (with its AR scratchpads) on first sight.
    pub fn insert_statement(&mut self, p: &Statement) -> Result<ProofId> {
        let normalized = p.normalize();
        if let Some(&id) = self.by_statement.get(&normalized) {
            return Ok(id);
        }
        let dist_eqn = normalized
            .as_equation_dist()
            .and_then(|eq| self.ar_dist.register(eq));
        let squared_eqn = normalized
            .as_equation_squared_dist()
            .and_then(|eq| self.ar_squared.register(eq));
        let ratio_eqn = normalized
            .as_equation_sin_or_dist()
            .and_then(|eq| self.ar_ratio.register(eq));
        let angle_eqn = normalized
            .as_equation_slope_angle()
            .and_then(|eq| self.ar_angle.register(eq));
        let id = ProofId(self.proofs.len() as u32);
        self.proofs.push(StatementProof::new(
            normalized.clone(),
            dist_eqn,
            squared_eqn,
            ratio_eqn,
            angle_eqn,
        ));
        self.by_statement.insert(normalized, id);
        self.initial_progress(id)?;
        Ok(id)
    }

    /// Settles reflexive and numerical-only statements on insertion.
    fn initial_progress(&mut self, id: ProofId) -> Result<()> {
        if self.proofs[id.index()].statement().is_refl() {
            return self.set_proved(id, ProofState::ByRefl);
        }
        if self.proofs[id.index()].statement().numerical_only() {
            if self.proofs[id.index()]
                .statement()
                .check_numerically(self.problem)
            {
                return self.set_proved(id, ProofState::Numerical);
            }
            let msg = self.proofs[id.index()].statement().print(self.problem);
            return Err(Error::NumericalCheck(msg));
        }
        Ok(())
    }

    pub fn prove_by_assumption(&mut self, id: ProofId) -> Result<()> {
        if self.proofs[id.index()].is_proved() {
            return Ok(());
        }
        self.set_proved(id, ProofState::ByAssumption)
    }

    /// Tries each AR engine in turn on a not-yet-proved statement.
    pub fn make_progress(&mut self, id: ProofId) -> Result<()> {
        if self.proofs[id.index()].is_proved() {
            return Ok(());
        }
        if let Some((_, slot)) = self.proofs[id.index()].dist_eqn {
            self.ar_dist.reduce(slot);
            if self.ar_dist.is_solved(slot) {
                return self.set_proved(id, ProofState::ArDist);
            }
        }
        if let Some((_, slot)) = self.proofs[id.index()].squared_eqn {
            self.ar_squared.reduce(slot);
            if self.ar_squared.is_solved(slot) {
                return self.set_proved(id, ProofState::ArSquaredDist);
            }
        }
        if let Some((_, slot)) = self.proofs[id.index()].ratio_eqn {
            self.ar_ratio.reduce(slot);
            if self.ar_ratio.is_solved(slot) {
                return self.set_proved(id, ProofState::ArRatio);
            }
        }
        if let Some((_, slot)) = self.proofs[id.index()].angle_eqn {
            self.ar_angle.reduce(slot);
            if self.ar_angle.is_solved(slot) {
                return self.set_proved(id, ProofState::ArAngle);
            }
        }
        Ok(())
    }

    /// Commits a proof and runs every side effect: chronology, numeric
    /// soundness warning, ratio cache, scratchpad refresh, feeding the AR
    /// systems, and the dependency closure.
    fn set_proved(&mut self, id: ProofId, state: ProofState) -> Result<()> {
        if state == ProofState::NotProved {
            return Ok(());
        }
        if self.proofs[id.index()].is_proved() {
            return Err(Error::Internal("trying to re-prove a statement".into()));
        }
        self.proofs[id.index()].set_state(state);
        self.established.push(id);

        if !self.proofs[id.index()]
            .statement()
            .check_numerically(self.problem)
        {
            error!(
                "established a numerically incorrect statement: {}",
                self.proofs[id.index()].statement().print(self.problem)
            );
        }

        if let Some(r) = self.proofs[id.index()].statement().as_ratio_squared_dist() {
            let key = minmax(r.left(), r.right());
            self.ratio_cache.insert(key);
        }

        let pf = &self.proofs[id.index()];
        let (dist_eqn, squared_eqn, ratio_eqn, angle_eqn) =
            (pf.dist_eqn, pf.squared_eqn, pf.ratio_eqn, pf.angle_eqn);
        if let Some((_, slot)) = dist_eqn {
            self.ar_dist.reduce(slot);
        }
        if let Some((_, slot)) = squared_eqn {
            self.ar_squared.reduce(slot);
        }
        if let Some((_, slot)) = ratio_eqn {
            self.ar_ratio.reduce(slot);
        }
        if let Some((_, slot)) = angle_eqn {
            self.ar_angle.reduce(slot);
        }

        if let Some((_, slot)) = dist_eqn {
            self.ar_dist.add_to_system(slot, id)?;
        }
        if let Some((_, slot)) = squared_eqn {
            self.ar_squared.add_to_system(slot, id)?;
        }
        if let Some((_, slot)) = ratio_eqn {
            self.ar_ratio.add_to_system(slot, id)?;
        }
        if let Some((_, slot)) = angle_eqn {
            self.ar_angle.add_to_system(slot, id)?;
        }

        let mut deps = std::collections::BTreeSet::new();
        for dep in self.immediate_dependencies(id) {
            deps.extend(self.proofs[dep.index()].point_deps.iter().copied());
        }
        deps.extend(self.proofs[id.index()].statement().points());
        self.proofs[id.index()].point_deps = deps;
        Ok(())
    }

    /// The proofs this one directly rests on.
    pub fn immediate_dependencies(&self, id: ProofId) -> Vec<ProofId> {
        let pf = &self.proofs[id.index()];
        match pf.state() {
            ProofState::NotProved
            | ProofState::ByRefl
            | ProofState::ByAssumption
            | ProofState::Numerical => Vec::new(),
            ProofState::ByTheorem(i) => self.applications[i].hypotheses().to_vec(),
            ProofState::ArDist => self
                .ar_dist
                .dependencies(pf.dist_eqn.map(|(_, s)| s).unwrap_or_default()),
            ProofState::ArSquaredDist => self
                .ar_squared
                .dependencies(pf.squared_eqn.map(|(_, s)| s).unwrap_or_default()),
            ProofState::ArRatio => self
                .ar_ratio
                .dependencies(pf.ratio_eqn.map(|(_, s)| s).unwrap_or_default()),
            ProofState::ArAngle => self
                .ar_angle
                .dependencies(pf.angle_eqn.map(|(_, s)| s).unwrap_or_default()),
        }
    }

    /// Registers a matched theorem: interns its statements and appends a
    /// pending application.
    pub fn insert_theorem(&mut self, thm: crate::theorem::Theorem) -> Result<()> {
        let k = self.applications.len();
        let mut hypotheses = Vec::with_capacity(thm.hypotheses().len());
        for p in thm.hypotheses() {
            hypotheses.push(self.insert_statement(p)?);
        }
        let mut conclusions = Vec::with_capacity(thm.conclusions().len());
        for p in thm.conclusions() {
            let id = self.insert_statement(p)?;
            self.proofs[id.index()].theorems_that_imply.push(k);
            conclusions.push(id);
        }
        self.applications
            .push(TheoremApplication::new(thm, hypotheses, conclusions));
        Ok(())
    }

    fn advance_theorem(&mut self, ind: usize) -> Result<()> {
        if self.applications[ind].state() != ApplicationState::Pending {
            return Ok(());
        }

        let conclusions = self.applications[ind].conclusions().to_vec();
        let mut conclusions_proved = true;
        for c in &conclusions {
            self.make_progress(*c)?;
            conclusions_proved = conclusions_proved && self.proofs[c.index()].is_proved();
        }
        if conclusions_proved {
            self.applications[ind].set_state(ApplicationState::Discarded);
            return Ok(());
        }

        let hypotheses = self.applications[ind].hypotheses().to_vec();
        let mut hypotheses_proved = true;
        for h in &hypotheses {
            self.make_progress(*h)?;
            if !self.proofs[h.index()].is_proved() {
                hypotheses_proved = false;
                break;
            }
        }
        if hypotheses_proved {
            self.applications[ind].set_state(ApplicationState::Proved);
            for c in conclusions {
                if self.proofs[c.index()].is_proved() {
                    continue;
                }
                self.make_progress(c)?;
                if !self.proofs[c.index()].is_proved() {
                    self.set_proved(c, ProofState::ByTheorem(ind))?;
                }
            }
        }
        Ok(())
    }

    /// Turns variables the AR engines solved to constants into derived
    /// `l2const` facts.
    fn process_squared_dist_eq(&mut self) -> Result<()> {
        let mut derived: Vec<SquaredDistEq> = Vec::new();

        for v in self.ar_dist.system.take_newly_solved() {
            let Some(row) = self.ar_dist.system.echelon().get(&v) else {
                continue;
            };
            let r = *row.eq().rhs();
            if r == Rat::from_integer(0) {
                return Err(Error::ZeroDistance(v.print(self.problem)));
            }
            derived.push(SquaredDistEq::new(v.squared(), rat_to_nnrat(&(r * r))));
        }

        for v in self.ar_squared.system.take_newly_solved() {
            let Some(row) = self.ar_squared.system.echelon().get(&v) else {
                continue;
            };
            let r = *row.eq().rhs();
            if r <= Rat::from_integer(0) {
                return Err(Error::ZeroDistance(v.print(self.problem)));
            }
            derived.push(SquaredDistEq::new(v, rat_to_nnrat(&r)));
        }

        for v in self.ar_ratio.system.take_newly_solved() {
            // `sin² α = r` solutions are matched by theorems on well-known
            // values instead.
            let Some(sq) = v.squared_dist() else {
                continue;
            };
            let Some(row) = self.ar_ratio.system.echelon().get(&v) else {
                continue;
            };
            let r = row.eq().rhs().as_nnrat();
            if r != NNRat::from_integer(0) {
                derived.push(SquaredDistEq::new(sq, r));
            }
        }

        for d in derived {
            let id = self.insert_statement(&Statement::SquaredDistEq(d))?;
            self.make_progress(id)?;
            if !self.proofs[id.index()].is_proved() {
                return Err(Error::Internal(
                    "failed to prove a generated squared-dist equality".into(),
                ));
            }
        }
        Ok(())
    }

    /// Harvests candidate squared-distance ratios from the echelon forms,
    /// verifies them numerically, and accepts those the systems imply.
    fn process_ratio_squared_dist(&mut self) -> Result<()> {
        // Length engine: both ratios of proportional rows are square, so
        // the candidate lowers to an `rconst` provable in the same engine.
        for sus in self.ar_dist.system.generate_suspected_ratio_squared_dist() {
            if self.ratio_cache.contains(&minmax(sus.left, sus.right)) {
                continue;
            }
            let cand = RatioSquaredDist::new(sus.left, sus.right, sus.ratio);
            if !(cand.check_nondegen(self.problem) && cand.check_equations(self.problem)) {
                continue;
            }
            let Some(eq) = cand.normalize().as_equation_dist() else {
                continue;
            };
            let mut red = ReducedEquation::new(eq);
            red.reduce(&self.ar_dist.system);
            if red.is_solved(&self.ar_dist.system) {
                let id = self.insert_statement(&cand.normalize_solved())?;
                self.make_progress(id)?;
            }
        }

        for sus in self
            .ar_squared
            .system
            .generate_suspected_ratio_squared_dist()
        {
            if self.ratio_cache.contains(&minmax(sus.left, sus.right)) {
                continue;
            }
            let cand = RatioSquaredDist::new(sus.left, sus.right, sus.ratio);
            if !(cand.check_nondegen(self.problem) && cand.check_equations(self.problem)) {
                continue;
            }
            let mut red = ReducedEquation::new(cand.as_equation_squared_dist());
            red.reduce(&self.ar_squared.system);
            if red.is_solved(&self.ar_squared.system) {
                let id = self.insert_statement(&cand.normalize_solved())?;
                self.make_progress(id)?;
            }
        }

        // Ratio engine: `l²/r² = 1` may reduce to `1 = c`, which pins the
        // actual ratio to `1/c`.
        for sus in self.ar_ratio.system.generate_suspected_ratio_squared_dist() {
            if self.ratio_cache.contains(&minmax(sus.left, sus.right)) {
                continue;
            }
            let cand = RatioSquaredDist::new(sus.left, sus.right, sus.ratio);
            let mut red = ReducedEquation::new(cand.as_equation_sin_or_dist());
            red.reduce(&self.ar_ratio.system);
            if red.remainder().lhs().is_empty() {
                let c = red.remainder().rhs().as_nnrat();
                if c != NNRat::from_integer(0) {
                    let found =
                        RatioSquaredDist::new(sus.left, sus.right, NNRat::from_integer(1) / c);
                    let id = self.insert_statement(&found.normalize_solved())?;
                    self.make_progress(id)?;
                }
            }
        }
        Ok(())
    }

    /// One saturation level: advance pending theorems under the point
    /// ceiling, harvest AR consequences, test the goals.
    pub fn run_level(&mut self, max_pt: Point) -> Result<bool> {
        let num_before = self.established.len();
        info!(
            "running level {}, starting with {} statements",
            self.level, num_before
        );

        let n = self.applications.len();
        for i in 0..n {
            if self.applications[i].max_point() <= max_pt {
                self.advance_theorem(i)?;
            }
        }

        self.process_squared_dist_eq()?;
        self.process_ratio_squared_dist()?;

        if !self.problem.goals().is_empty() {
            let goals = self.goals.clone();
            let mut all = true;
            for g in goals {
                if !self.proofs[g.index()].is_proved() {
                    self.make_progress(g)?;
                    if !self.proofs[g.index()].is_proved() {
                        all = false;
                    }
                }
            }
            self.solved = all;
        }

        info!(
            "proved {} new facts, {} total",
            self.established.len() - num_before,
            self.established.len()
        );
        self.level += 1;
        Ok(num_before < self.established.len())
    }

    /// Saturates for up to `max_levels` levels; returns whether all goals
    /// were proved.
    pub fn run(&mut self, max_levels: usize) -> Result<bool> {
        for goal in self.problem.goals() {
            if !goal.check_numerically(self.problem) {
                return Err(Error::GoalCheck(goal.print(self.problem)));
            }
        }
        if self.problem.goals().is_empty() {
            for max_pt in self.problem.all_points() {
                for _ in 0..max_levels {
                    if !self.run_level(max_pt)? {
                        break;
                    }
                }
            }
            self.solved = true;
        } else {
            let max_pt = Point(self.problem.num_points() as u32 - 1);
            for _ in 0..max_levels {
                if !self.run_level(max_pt)? {
                    info!("no new statements, stop trying");
                    break;
                }
                if self.solved {
                    info!("solved the problem");
                    break;
                }
            }
        }
        Ok(self.solved)
    }

    /// Backward sweep from the goals marking everything they rest on.
    fn mark_needed_for_goal(&mut self) {
        let mut stack: Vec<ProofId> = self.goals.clone();
        while let Some(id) = stack.pop() {
            if self.proofs[id.index()].needed_for_goal {
                continue;
            }
            self.proofs[id.index()].needed_for_goal = true;
            stack.extend(self.immediate_dependencies(id));
        }
    }

    fn format_proof(&self, id: ProofId) -> String {
        let pf = &self.proofs[id.index()];
        match pf.state() {
            ProofState::ByTheorem(i) => {
                let app = &self.applications[i];
                let thm = app.theorem();
                let hyps: Vec<String> = thm
                    .hypotheses()
                    .iter()
                    .map(|p| p.print(self.problem))
                    .collect();
                let concls: Vec<String> = thm
                    .conclusions()
                    .iter()
                    .map(|p| p.print(self.problem))
                    .collect();
                let rule = if thm.rule_id() == "ignore" {
                    thm.name()
                } else {
                    thm.rule_id()
                };
                format!("{} ⊢[{}] {}", hyps.join(", "), rule, concls.join(", "))
            }
            ProofState::ByRefl | ProofState::ByAssumption | ProofState::Numerical => {
                format!("{} {}", pf.state().describe(), pf.statement().print(self.problem))
            }
            ProofState::ArDist
            | ProofState::ArSquaredDist
            | ProofState::ArRatio
            | ProofState::ArAngle => {
                let deps: Vec<String> = self
                    .immediate_dependencies(id)
                    .iter()
                    .map(|d| self.proofs[d.index()].statement().print(self.problem))
                    .collect();
                format!(
                    "From {} {} {}",
                    deps.join(", "),
                    pf.state().describe(),
                    pf.statement().print(self.problem)
                )
            }
            ProofState::NotProved => {
                for &k in pf.theorems_that_imply() {
                    info!(
                        "would follow from: {} ({})",
                        self.applications[k].theorem().name(),
                        self.applications[k].state().describe()
                    );
                }
                format!("{}: not proved", pf.statement().print(self.problem))
            }
        }
    }

    /// Text output: one established fact per line (goal-filtered when
    /// goals exist), with unproved goals annotated at the end.
    pub fn proof_text(&mut self) -> String {
        self.mark_needed_for_goal();
        let mut out = String::new();
        for &id in &self.established {
            if self.goals.is_empty() || self.proofs[id.index()].needed_for_goal {
                out.push_str(&self.format_proof(id));
                out.push('\n');
            }
        }
        for &g in &self.goals {
            if !self.proofs[g.index()].is_proved() {
                out.push_str(&self.format_proof(g));
                out.push('\n');
            }
        }
        out
    }

    fn point_deps_json(&self, id: ProofId) -> Value {
        Value::Array(
            self.proofs[id.index()]
                .point_deps
                .iter()
                .map(|p| Value::String(self.problem.point_name(*p).to_string()))
                .collect(),
        )
    }

    fn ar_json<V: ArVar>(
        &self,
        id: ProofId,
        table: &ArTable<V>,
        entry: (Rat, usize),
        eq_of: impl Fn(&Statement) -> Option<Equation<V>>,
        slot_of: impl Fn(&StatementProof) -> Option<(Rat, usize)>,
        var_name: impl Fn(&V) -> String,
    ) -> Value {
        let (coeff_rhs, slot) = entry;
        let red = &table.reduced[slot];
        let mut assumptions = Vec::new();
        for (ind, coeff) in red.combo().terms() {
            let dep_id = table.system.row(*ind).1;
            let dep = &self.proofs[dep_id.index()];
            let mut obj = dep.statement().to_json(self.problem);
            let dep_coeff = slot_of(dep).map(|(c, _)| c).unwrap_or_else(|| Rat::from_integer(1));
            obj["coeff"] = Value::String(rat_to_string(&(coeff * dep_coeff / coeff_rhs)));
            if let Some(dep_eqn) = eq_of(dep.statement()) {
                let mut lhs_terms = serde_json::Map::new();
                for (var, c) in dep_eqn.lhs().terms() {
                    lhs_terms.insert(var_name(var), Value::String(rat_to_string(c)));
                }
                obj["lhs_terms"] = Value::Object(lhs_terms);
            }
            assumptions.push(obj);
        }
        let pf = &self.proofs[id.index()];
        let mut concl = pf.statement().to_json(self.problem);
        if let Some(eqn) = eq_of(pf.statement()) {
            let mut lhs_terms = serde_json::Map::new();
            for (var, c) in eqn.lhs().terms() {
                lhs_terms.insert(var_name(var), Value::String(rat_to_string(c)));
            }
            concl["lhs_terms"] = Value::Object(lhs_terms);
        }
        json!({
            "deduction_type": "ar",
            "ar_reason": V::AR_LABEL,
            "point_deps": self.point_deps_json(id),
            "assumptions": assumptions,
            "assertions": [concl],
        })
    }

    fn deduction_json(&self, id: ProofId) -> Value {
        let pf = &self.proofs[id.index()];
        let (deduction_type, name): (&str, String) = match pf.state() {
            ProofState::NotProved => ("none", "not proved".to_string()),
            ProofState::ByRefl => ("refl", "by reflexivity".to_string()),
            ProofState::ByAssumption => ("rule", "By construction".to_string()),
            ProofState::Numerical => ("num", "Numerical check".to_string()),
            ProofState::ByTheorem(i) => (
                "rule",
                self.applications[i].theorem().rule_id().to_string(),
            ),
            ProofState::ArDist => {
                let prob = self.problem;
                return self.ar_json(
                    id,
                    &self.ar_dist,
                    pf.dist_eqn.unwrap_or((Rat::from_integer(1), 0)),
                    Statement::as_equation_dist,
                    |p| p.dist_eqn,
                    |v| v.print(prob),
                );
            }
            ProofState::ArSquaredDist => {
                let prob = self.problem;
                return self.ar_json(
                    id,
                    &self.ar_squared,
                    pf.squared_eqn.unwrap_or((Rat::from_integer(1), 0)),
                    Statement::as_equation_squared_dist,
                    |p| p.squared_eqn,
                    |v| v.print(prob),
                );
            }
            ProofState::ArRatio => {
                let prob = self.problem;
                return self.ar_json(
                    id,
                    &self.ar_ratio,
                    pf.ratio_eqn.unwrap_or((Rat::from_integer(1), 0)),
                    Statement::as_equation_sin_or_dist,
                    |p| p.ratio_eqn,
                    |v| v.print(prob),
                );
            }
            ProofState::ArAngle => {
                let prob = self.problem;
                return self.ar_json(
                    id,
                    &self.ar_angle,
                    pf.angle_eqn.unwrap_or((Rat::from_integer(1), 0)),
                    Statement::as_equation_slope_angle,
                    |p| p.angle_eqn,
                    |v| v.print(prob),
                );
            }
        };
        let assumptions: Vec<Value> = self
            .immediate_dependencies(id)
            .iter()
            .map(|d| self.proofs[d.index()].statement().to_json(self.problem))
            .collect();
        json!({
            "deduction_type": deduction_type,
            "newclid_rule": name,
            "point_deps": self.point_deps_json(id),
            "assumptions": assumptions,
            "assertions": [pf.statement().to_json(self.problem)],
        })
    }

    /// Machine-consumable output with explicit AR coefficient maps.
    pub fn proof_json(&mut self) -> Value {
        self.mark_needed_for_goal();
        let mut all_deductions = Vec::new();
        let mut deductions_for_goal = Vec::new();
        for &id in &self.established {
            let val = self.deduction_json(id);
            if self.proofs[id.index()].needed_for_goal {
                deductions_for_goal.push(val.clone());
            }
            all_deductions.push(val);
        }
        let status = if self.solved { "solved" } else { "saturated" };
        json!({
            "status": status,
            "goals": [],
            "deductions_for_goal": deductions_for_goal,
            "all_deductions": all_deductions,
        })
    }
}

fn minmax(a: SquaredDist, b: SquaredDist) -> (SquaredDist, SquaredDist) {
    (a.min(b), a.max(b))
}
