use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::court::transform::CourtPosition;

/// One recorded in-game action: a tap on the court diagram, attributed to
/// a player.
///
/// The position is stored in canonical court coordinates (FIBA meters,
/// horizontal reference frame), never surface pixels. On the wire it
/// serializes as two numeric fields, `position_x`/`position_y`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ActionWire", into = "ActionWire")]
pub struct Action {
    pub id: Uuid,
    pub action_type: ActionType,
    pub position: CourtPosition,
    pub player_id: Uuid,
    pub game_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Wire shape of an action row.
#[derive(Serialize, Deserialize)]
struct ActionWire {
    id: Uuid,
    #[serde(rename = "type")]
    action_type: ActionType,
    position_x: f64,
    position_y: f64,
    player_id: Uuid,
    game_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<ActionWire> for Action {
    fn from(wire: ActionWire) -> Self {
        Self {
            id: wire.id,
            action_type: wire.action_type,
            position: CourtPosition { x: wire.position_x, y: wire.position_y },
            player_id: wire.player_id,
            game_id: wire.game_id,
            created_at: wire.created_at,
        }
    }
}

impl From<Action> for ActionWire {
    fn from(action: Action) -> Self {
        Self {
            id: action.id,
            action_type: action.action_type,
            position_x: action.position.x,
            position_y: action.position.y,
            player_id: action.player_id,
            game_id: action.game_id,
            created_at: action.created_at,
        }
    }
}

/// Action taxonomy, with the wire codes the frontend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "3PTS")]
    ThreePts,
    #[serde(rename = "2PTS")]
    TwoPts,
    #[serde(rename = "FREE_THROW")]
    FreeThrow,
    #[serde(rename = "REBOUND")]
    Rebound,
    #[serde(rename = "ASSIST")]
    Assist,
    #[serde(rename = "STEAL")]
    Steal,
    #[serde(rename = "FOUL")]
    Foul,
}

impl ActionType {
    pub const ALL: [ActionType; 7] = [
        ActionType::ThreePts,
        ActionType::TwoPts,
        ActionType::FreeThrow,
        ActionType::Rebound,
        ActionType::Assist,
        ActionType::Steal,
        ActionType::Foul,
    ];

    /// Points this action adds to the tracked team's score.
    pub fn points(&self) -> u16 {
        match self {
            ActionType::ThreePts => 3,
            ActionType::TwoPts => 2,
            ActionType::FreeThrow => 1,
            ActionType::Rebound | ActionType::Assist | ActionType::Steal | ActionType::Foul => 0,
        }
    }

    pub fn is_scoring(&self) -> bool {
        self.points() > 0
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActionType::ThreePts => "3PTS",
            ActionType::TwoPts => "2PTS",
            ActionType::FreeThrow => "FREE_THROW",
            ActionType::Rebound => "REBOUND",
            ActionType::Assist => "ASSIST",
            ActionType::Steal => "STEAL",
            ActionType::Foul => "FOUL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionType::ThreePts => "Three pointer",
            ActionType::TwoPts => "Two pointer",
            ActionType::FreeThrow => "Free throw",
            ActionType::Rebound => "Rebound",
            ActionType::Assist => "Assist",
            ActionType::Steal => "Steal",
            ActionType::Foul => "Foul",
        }
    }
}

impl Action {
    pub fn new(
        action_type: ActionType,
        position: CourtPosition,
        player_id: Uuid,
        game_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            action_type,
            position,
            player_id,
            game_id,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for an action; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionPatch {
    #[serde(rename = "type")]
    pub action_type: Option<ActionType>,
    pub position: Option<CourtPosition>,
    pub player_id: Option<Uuid>,
}
