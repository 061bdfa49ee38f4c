use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use tracing::warn;

use crate::model::{GameFormat, PlayerIndex};

/// Whole cents. Each player's winnings are rounded once, after which every
/// settlement step is exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    /// Rounds half away from zero to the nearest cent.
    #[must_use]
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Cents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.dollars())
    }
}

impl<'de> Deserialize<'de> for Cents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_dollars)
    }
}

impl Add for Cents {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerStanding {
    pub name: String,
    pub points: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerAmount {
    pub player: PlayerIndex,
    pub name: String,
    pub points: u32,
    pub amount: Cents,
}

/// `from` pays `to`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub from: PlayerIndex,
    pub to: PlayerIndex,
    pub amount: Cents,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub amounts: Vec<PlayerAmount>,
    pub transactions: Vec<Transaction>,
}

/// Largest stake per point, in dollars, that settlement accepts.
pub const MAX_POINT_VALUE: f64 = 10_000.0;

/// Turns point totals into the payments needed to square up.
///
/// `points × stake` is rounded to the cent once per player; nothing is
/// rounded before that. Returns `None` when the format is not played for
/// money or there is no usable stake per point.
#[must_use]
pub fn settle_payments(
    standings: &[PlayerStanding],
    format: GameFormat,
    point_value: Option<f64>,
) -> Option<Settlement> {
    if !format.is_wager() {
        return None;
    }
    let stake = point_value.filter(|v| v.is_finite() && *v > 0.0)?;
    if stake > MAX_POINT_VALUE {
        warn!(stake, max = MAX_POINT_VALUE, "stake per point too large to settle");
        return None;
    }

    let amounts: Vec<PlayerAmount> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| PlayerAmount {
            player: PlayerIndex::new(i),
            name: s.name.clone(),
            points: s.points,
            amount: Cents::from_dollars(f64::from(s.points) * stake),
        })
        .collect();
    let money: Vec<Cents> = amounts.iter().map(|a| a.amount).collect();
    let transactions = simplify_debts(money.len(), &pairwise_debts(&money));

    Some(Settlement {
        amounts,
        transactions,
    })
}

/// Every pair of players settles the difference between what they won:
/// the lower earner owes the higher earner.
#[must_use]
pub fn pairwise_debts(amounts: &[Cents]) -> Vec<Transaction> {
    let mut debts = Vec::new();
    for (i, a) in amounts.iter().enumerate() {
        for (j, b) in amounts.iter().enumerate().skip(i + 1) {
            let diff = *a - *b;
            if diff.is_positive() {
                debts.push(Transaction {
                    from: PlayerIndex::new(j),
                    to: PlayerIndex::new(i),
                    amount: diff,
                });
            } else if (-diff).is_positive() {
                debts.push(Transaction {
                    from: PlayerIndex::new(i),
                    to: PlayerIndex::new(j),
                    amount: -diff,
                });
            }
        }
    }
    debts
}

/// What each player is owed (positive) or owes (negative) once all debts
/// are added up.
#[must_use]
pub fn net_balances(player_count: usize, debts: &[Transaction]) -> Vec<Cents> {
    let mut balances = vec![Cents::ZERO; player_count];
    for debt in debts {
        if let Some(b) = balances.get_mut(debt.to.get()) {
            *b += debt.amount;
        }
        if let Some(b) = balances.get_mut(debt.from.get()) {
            *b -= debt.amount;
        }
    }
    balances
}

/// Collapses a set of IOUs into at most `n - 1` payments that leave every
/// balance at zero.
#[must_use]
pub fn simplify_debts(player_count: usize, debts: &[Transaction]) -> Vec<Transaction> {
    let balances = net_balances(player_count, debts);

    let mut creditors: Vec<(usize, Cents)> = balances
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_positive())
        .map(|(i, b)| (i, *b))
        .collect();
    let mut debtors: Vec<(usize, Cents)> = balances
        .iter()
        .enumerate()
        .filter(|(_, b)| (-**b).is_positive())
        .map(|(i, b)| (i, -*b))
        .collect();
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut transactions = Vec::new();
    let (mut c, mut d) = (0, 0);
    while c < creditors.len() && d < debtors.len() {
        let amount = creditors[c].1.min(debtors[d].1);
        if amount.is_positive() {
            transactions.push(Transaction {
                from: PlayerIndex::new(debtors[d].0),
                to: PlayerIndex::new(creditors[c].0),
                amount,
            });
        }
        creditors[c].1 -= amount;
        debtors[d].1 -= amount;
        if creditors[c].1.is_zero() {
            c += 1;
        }
        if debtors[d].1.is_zero() {
            d += 1;
        }
    }
    transactions
}
