//! Serialization groups derived from the serialization-key tree.

use serde::Serialize;

use crate::parameter::ScalarType;
use crate::tree::{PathNode, PathTree};

/// Members and identity of one object in the serialized configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializationGroup {
    /// Key of the object within its parent.
    pub name: String,
    /// `param` of the enclosing group; empty for top-level groups.
    pub parent_path: String,
    /// Collision-free identifier: ancestor names and `name` joined by `_`.
    pub param: String,
    /// Values stored directly in this object, in declaration order.
    pub members: Vec<SerializationMember>,
}

/// A scalar value stored in a serialized object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializationMember {
    /// Key of the value within its object.
    pub name: String,
    /// Dotted name of the parameter receiving the value.
    pub external_name: String,
    /// Type used to read the value.
    pub scalar_type: ScalarType,
}

/// Walks the serialization tree and returns one group per non-root branch.
///
/// Groups are emitted parent first, so an ancestor always precedes its
/// descendants. The root is a sentinel and never becomes a group; see
/// [`root_members`] for values stored at the top level.
#[must_use]
pub fn map_serialization(tree: &PathTree<'_>) -> Vec<SerializationGroup> {
    tree.root()
        .branches()
        .flat_map(|branch| map_group(branch, ""))
        .collect()
}

/// Values stored directly in the top-level object.
#[must_use]
pub fn root_members(tree: &PathTree<'_>) -> Vec<SerializationMember> {
    members(tree.root())
}

fn map_group(node: &PathNode<'_>, parent_path: &str) -> Vec<SerializationGroup> {
    let param = if parent_path.is_empty() {
        node.name().to_owned()
    } else {
        format!("{parent_path}_{}", node.name())
    };
    let mut groups = vec![SerializationGroup {
        name: node.name().to_owned(),
        parent_path: parent_path.to_owned(),
        param: param.clone(),
        members: members(node),
    }];
    for branch in node.branches() {
        groups.extend(map_group(branch, &param));
    }
    groups
}

fn members(node: &PathNode<'_>) -> Vec<SerializationMember> {
    node.leaves()
        .map(|(leaf, parameter)| SerializationMember {
            name: leaf.name().to_owned(),
            external_name: parameter.name.clone(),
            scalar_type: parameter.scalar_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::ParameterDecl;
    use crate::parameter::Parameter;
    use rstest::rstest;

    fn parameter(name: &str, key: &str) -> Parameter {
        Parameter::resolve(&ParameterDecl {
            name: name.to_owned(),
            serialization_key: key.to_owned(),
            scalar_type: "string".to_owned(),
            ..ParameterDecl::default()
        })
        .expect("resolve parameter")
    }

    fn tree(params: &[Parameter]) -> PathTree<'_> {
        PathTree::build("root", params, |p| p.serialization_key.as_str()).expect("build tree")
    }

    #[rstest]
    fn groups_follow_serialization_keys_not_names() {
        let params = [
            parameter("main.deep.enumtest", "main.deep.param_enum"),
            parameter("main.first", "main.first"),
        ];
        let groups = map_serialization(&tree(&params));
        assert_eq!(
            groups,
            vec![
                SerializationGroup {
                    name: "main".to_owned(),
                    parent_path: String::new(),
                    param: "main".to_owned(),
                    members: vec![SerializationMember {
                        name: "first".to_owned(),
                        external_name: "main.first".to_owned(),
                        scalar_type: ScalarType::String,
                    }],
                },
                SerializationGroup {
                    name: "deep".to_owned(),
                    parent_path: "main".to_owned(),
                    param: "main_deep".to_owned(),
                    members: vec![SerializationMember {
                        name: "param_enum".to_owned(),
                        external_name: "main.deep.enumtest".to_owned(),
                        scalar_type: ScalarType::String,
                    }],
                },
            ]
        );
    }

    #[rstest]
    fn root_is_never_a_group() {
        let params = [parameter("other", "other")];
        let built = tree(&params);
        assert!(map_serialization(&built).is_empty());
        let names: Vec<String> = root_members(&built).into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["other"]);
    }

    #[rstest]
    fn ancestors_precede_descendants_across_siblings() {
        let params = [
            parameter("p1", "a.b.c.v"),
            parameter("p2", "d.v"),
            parameter("p3", "a.e.v"),
        ];
        let params_order: Vec<String> = map_serialization(&tree(&params))
            .into_iter()
            .map(|g| g.param)
            .collect();
        assert_eq!(params_order, ["a", "a_b", "a_b_c", "a_e", "d"]);
    }
}
