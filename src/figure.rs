use crate::color::SeriesColor;
use crate::config::{FLOATING_BASE_DOF, JOINTS_PER_LEG};
use crate::data::error::Result;
use crate::data::model::{ExperimentLog, LogFile};

// ---------------------------------------------------------------------------
// Signal group descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Right,
    Left,
}

impl Leg {
    pub const ALL: [Leg; 2] = [Leg::Right, Leg::Left];

    /// Position of the leg's first joint among the joint channels.
    pub fn joint_offset(self) -> usize {
        match self {
            Leg::Right => 0,
            Leg::Left => JOINTS_PER_LEG,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Leg::Right => "right_leg",
            Leg::Left => "left_leg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Position,
    Velocity,
}

impl Quantity {
    pub const ALL: [Quantity; 2] = [Quantity::Position, Quantity::Velocity];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Position => "jpos",
            Quantity::Velocity => "jvel",
        }
    }

    /// Series overlaid in every subplot, in drawing order.
    pub fn traces(self) -> [TraceSpec; 3] {
        match self {
            Quantity::Position => [
                TraceSpec::joint(LogFile::JposDes, SeriesColor::Red),
                TraceSpec::configuration(LogFile::Config, SeriesColor::Blue),
                TraceSpec::joint(LogFile::MotorJpos, SeriesColor::Cyan),
            ],
            Quantity::Velocity => [
                TraceSpec::joint(LogFile::JointJvel, SeriesColor::Cyan),
                TraceSpec::configuration(LogFile::Qdot, SeriesColor::Blue),
                TraceSpec::joint(LogFile::JvelDes, SeriesColor::Red),
            ],
        }
    }
}

/// Which table a series comes from and where its joints start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSpec {
    pub file: LogFile,
    /// Columns preceding joint 0 of the right leg.
    pub base_offset: usize,
    pub color: SeriesColor,
}

impl TraceSpec {
    /// A table holding joint channels only.
    pub const fn joint(file: LogFile, color: SeriesColor) -> Self {
        Self {
            file,
            base_offset: 0,
            color,
        }
    }

    /// A configuration-space table, whose joints follow the floating base.
    pub const fn configuration(file: LogFile, color: SeriesColor) -> Self {
        Self {
            file,
            base_offset: FLOATING_BASE_DOF,
            color,
        }
    }

    pub fn column(&self, leg: Leg, joint: usize) -> usize {
        self.base_offset + leg.joint_offset() + joint
    }
}

/// One figure's worth of signals: a quantity for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalGroup {
    pub quantity: Quantity,
    pub leg: Leg,
}

impl SignalGroup {
    pub fn title(&self) -> String {
        format!("{} ({})", self.quantity.name(), self.leg.name())
    }

    /// Identifier without spaces, used for export column names.
    pub fn key(&self) -> String {
        format!("{}_{}", self.quantity.name(), self.leg.name())
    }
}

/// The four figures, in window order.
pub fn signal_groups() -> Vec<SignalGroup> {
    Quantity::ALL
        .iter()
        .flat_map(|&quantity| Leg::ALL.iter().map(move |&leg| SignalGroup { quantity, leg }))
        .collect()
}

// ---------------------------------------------------------------------------
// Plot-ready figures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// `file[column]`, e.g. `config[9]`.
    pub label: String,
    pub color: SeriesColor,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    /// Joint index within the leg.
    pub joint: usize,
    pub traces: Vec<Trace>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub key: String,
    pub title: String,
    /// Shared x axis of every trace.
    pub time: Vec<f64>,
    pub subplots: Vec<Subplot>,
}

impl Figure {
    /// Build the subplots for `group` from an aligned log.
    ///
    /// Fails if any table is narrower than the columns the group reads.
    pub fn build(log: &ExperimentLog, group: SignalGroup) -> Result<Figure> {
        let specs = group.quantity.traces();
        let subplots = (0..JOINTS_PER_LEG)
            .map(|joint| -> Result<Subplot> {
                let traces = specs
                    .iter()
                    .map(|spec| -> Result<Trace> {
                        let column = spec.column(group.leg, joint);
                        Ok(Trace {
                            label: format!("{}[{column}]", spec.file.stem()),
                            color: spec.color,
                            values: log.column(spec.file, column)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Subplot { joint, traces })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Figure {
            key: group.key(),
            title: group.title(),
            time: log.time.values().to_vec(),
            subplots,
        })
    }
}

/// Build all four figures; the first failure aborts.
pub fn build_figures(log: &ExperimentLog) -> Result<Vec<Figure>> {
    signal_groups()
        .into_iter()
        .map(|group| Figure::build(log, group))
        .collect()
}
