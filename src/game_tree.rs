use crate::board::{Board, Move, Symbol};
use crate::minimax::{Role, successors};
use crate::rules::{Outcome, Utility, outcome, turn, utility};
use ego_tree::{NodeMut, NodeRef, Tree};

/// A single position in a [`GameTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameNode {
    /// The number of moves between the root and this node.
    pub height: u8,
    /// The position this node represents.
    pub board: Board,
    /// The move that led here from the parent. `None` for the root.
    pub prev_move: Option<Move>,
    /// The mark whose turn it is on `board`.
    pub to_move: Symbol,
    /// Whether the game is over at this node.
    pub outcome: Outcome,
    /// The minimax value of this node.
    pub value: Utility,
}

impl GameNode {
    fn new(board: Board, prev_move: Option<Move>, height: u8) -> Self {
        GameNode {
            height,
            board,
            prev_move,
            to_move: turn(&board),
            outcome: outcome(&board),
            value: Utility::Draw,
        }
    }

    /// Returns `true` if the game is over at this node.
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }
}

/// The complete game tree below a board, every node scored by minimax.
///
/// Children appear in row-major order of the move that reaches them. From an
/// empty board the tree holds 549,946 nodes, so prefer [`Minimax`] when only
/// the best move is needed.
///
/// [`Minimax`]: crate::minimax::Minimax
#[derive(Debug, Clone)]
pub struct GameTree {
    tree: Tree<GameNode>,
}

impl GameTree {
    /// Expands and scores every position reachable from `board`.
    pub fn build(board: &Board) -> Self {
        let mut tree = Tree::new(GameNode::new(*board, None, 0));
        let value = expand(tree.root_mut(), Role::for_symbol(turn(board)));
        tracing::debug!(value = value.value(), "game tree built");
        Self { tree }
    }

    /// Returns an immutable reference to the underlying tree.
    pub fn tree(&self) -> &Tree<GameNode> {
        &self.tree
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeRef<'_, GameNode> {
        self.tree.root()
    }

    /// Returns the minimax value of the root.
    pub fn value(&self) -> Utility {
        self.root().value().value
    }

    /// Returns the number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.tree.nodes().count()
    }

    /// Always `false`: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the child the side to move should pick: the first child in
    /// row-major order that reaches the root value.
    pub fn best_child(&self) -> Option<NodeRef<'_, GameNode>> {
        let value = self.value();
        self.root().children().find(|child| child.value().value == value)
    }
}

/// Appends the children of `node` recursively and returns its value.
fn expand(mut node: NodeMut<'_, GameNode>, role: Role) -> Utility {
    let board = node.value().board;
    let height = node.value().height;
    if let Ok(score) = utility(&board) {
        node.value().value = score;
        return score;
    }

    let mut best: Option<Utility> = None;
    for (mv, next) in successors(&board) {
        let child = node.append(GameNode::new(next, Some(mv), height + 1));
        let value = expand(child, role.other());
        if best.is_none_or(|best| role.prefers(value, best)) {
            best = Some(value);
        }
    }

    let value = best.unwrap_or(Utility::Draw);
    node.value().value = value;
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::Minimax;
    use crate::rules::tests::board;

    #[test]
    fn finished_board_is_a_single_leaf() {
        let tree = GameTree::build(&board("XXX\nOO.\n..."));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.value(), Utility::XWins);
        assert!(tree.root().value().is_terminal());
        assert!(tree.best_child().is_none());
    }

    #[test]
    fn tree_agrees_with_search() {
        // arrange
        let position = board("X..\n.O.\n...");
        let plain = Minimax::builder().with_transposition_table(false).build();

        // act
        let tree = GameTree::build(&position);
        let report = plain.search(&position);

        // assert
        assert_eq!(tree.value(), report.value);
        assert_eq!(tree.len() as u64, report.nodes);
        let best = tree.best_child().unwrap();
        assert_eq!(best.value().prev_move, report.best_move);
        assert_eq!(best.value().height, 1);
    }

    #[test]
    fn children_follow_row_major_order() {
        let position = board("XOX\nOX.\n.O.");
        let tree = GameTree::build(&position);
        let moves: Vec<_> = tree
            .root()
            .children()
            .filter_map(|child| child.value().prev_move)
            .collect();
        assert_eq!(moves, vec![Move::new(1, 2), Move::new(2, 0), Move::new(2, 2)]);
        assert!(tree.root().children().all(|child| child.value().to_move == Symbol::O));
    }

    #[test]
    fn leaves_are_terminal_and_inner_nodes_are_not() {
        let tree = GameTree::build(&board("XO.\n.X.\n..O"));
        for node in tree.tree().nodes() {
            let has_children = node.has_children();
            assert_eq!(node.value().is_terminal(), !has_children);
        }
    }
}
