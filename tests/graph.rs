use indoc::indoc;
use vault_keys::{Connection, KeyGraph, LetterSet, NodeKind, Position, VaultMap};

fn connection_to(graph: &KeyGraph, from: usize, to: usize) -> Option<&Connection> {
    graph.connections(from).iter().find(|conn| conn.to() == to)
}

#[test]
fn nodes_are_entrances_then_sorted_keys() {
    let map = VaultMap::try_from(indoc! {"
        #########
        #b.A.@.a#
        #########
    "})
    .unwrap();
    let graph = KeyGraph::build(&map);

    assert_eq!(graph.node_n(), 3);
    assert_eq!(graph.entrance_n(), 1);
    assert_eq!(graph.key_n(), 2);
    assert_eq!(graph.node(0).map(|n| n.kind()), Some(NodeKind::Entrance(0)));
    assert_eq!(graph.node(1).map(|n| *n.pos()), Some(Position::new(1, 7)));
    assert_eq!(graph.key_of(1), Some('a'));
    assert_eq!(graph.key_of(2), Some('b'));
    assert_eq!(graph.key_of(0), None);
    assert_eq!(graph.node_of_key('b'), Some(2));
    assert_eq!(graph.all_keys().iter().collect::<String>(), "ab");
}

#[test]
fn connections_record_steps_and_doors() {
    let map = VaultMap::try_from(indoc! {"
        #########
        #b.A.@.a#
        #########
    "})
    .unwrap();
    let graph = KeyGraph::build(&map);

    let to_a = connection_to(&graph, 0, 1).unwrap();
    assert_eq!(to_a.steps_n(), 2);
    assert!(to_a.doors().is_empty());

    let to_b = connection_to(&graph, 0, 2).unwrap();
    assert_eq!(to_b.steps_n(), 4);
    assert_eq!(*to_b.doors(), LetterSet::from_iter(['a']));

    let a_to_b = connection_to(&graph, 1, 2).unwrap();
    assert_eq!(a_to_b.steps_n(), 6);
    assert!(a_to_b.doors().contains('A'));
    assert_eq!(connection_to(&graph, 2, 1).map(Connection::steps_n), Some(6));

    // No key connects to itself, and nothing leads back to an entrance.
    assert!(connection_to(&graph, 1, 1).is_none());
    assert!(connection_to(&graph, 2, 2).is_none());
    assert!((0..graph.node_n()).all(|ind| connection_to(&graph, ind, 0).is_none()));
}

#[test]
fn walk_continues_past_keys() {
    let map = VaultMap::try_from(indoc! {"
        #########
        #@.a.B.b#
        #########
    "})
    .unwrap();
    let graph = KeyGraph::build(&map);

    let to_b = connection_to(&graph, 0, 2).unwrap();
    assert_eq!(to_b.steps_n(), 6);
    assert_eq!(to_b.doors().iter().collect::<String>(), "b");
}

#[test]
fn doors_off_the_path_are_ignored() {
    let map = VaultMap::try_from(indoc! {"
        #########
        #@.A.b.c#
        ###.###C#
        ###a###.#
        #########
    "})
    .unwrap();
    let graph = KeyGraph::build(&map);
    let (a, b, c) = (1, 2, 3);

    let doors_of = |from, to| {
        connection_to(&graph, from, to)
            .map(|conn| conn.doors().iter().collect::<String>())
            .unwrap()
    };
    assert_eq!(doors_of(0, b), "a");
    assert_eq!(doors_of(0, c), "a");
    assert_eq!(doors_of(c, b), "");
    assert_eq!(doors_of(a, c), "a");
    assert_eq!(doors_of(c, a), "a");
    assert_eq!(connection_to(&graph, a, c).map(Connection::steps_n), Some(6));
}

#[test]
fn unreachable_key_has_no_connection() {
    let map = VaultMap::try_from(indoc! {"
        ########
        #@.a#.b#
        ########
    "})
    .unwrap();
    let graph = KeyGraph::build(&map);

    assert!(connection_to(&graph, 0, 1).is_some());
    assert!(connection_to(&graph, 0, 2).is_none());
    assert!(graph.connections(2).is_empty());
    assert!(graph.connections(42).is_empty());
}
