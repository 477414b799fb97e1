use super::{Element, Mesh, Node};
use gemlab::shapes::GeoKind;

/// Holds samples of meshes
pub struct SampleMeshes {}

impl SampleMeshes {
    /// Returns a quadratic right triangle with its three boundary edges
    ///
    /// The bed is flat (z = 0), the water is at rest, and the surface is at `depth`.
    ///
    /// ```text
    ///  2
    ///  |`.          elements:
    ///  5  `4          0: Tri6 [0, 1, 2, 3, 4, 5]   (region)
    ///  |    `.        1: Lin3 [0, 1, 3]            (bottom)
    ///  0---3--1       2: Lin3 [1, 2, 4]            (hypotenuse)
    ///                 3: Lin3 [2, 0, 5]            (left)
    /// ```
    pub fn one_tri6_with_edges(depth: f64) -> Mesh {
        let xy = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.5, 0.0], [0.5, 0.5], [0.0, 0.5]];
        let nodes = nodes_at_rest(&xy, depth);
        Mesh {
            nodes,
            elements: vec![
                Element::region(0, GeoKind::Tri6, &[0, 1, 2, 3, 4, 5], 1),
                Element::boundary(1, GeoKind::Lin3, &[0, 1, 3], 1),
                Element::boundary(2, GeoKind::Lin3, &[1, 2, 4], 1),
                Element::boundary(3, GeoKind::Lin3, &[2, 0, 5], 1),
            ],
        }
    }

    /// Returns two quadratic triangles covering the unit square (surface at 1.0, flat bed)
    ///
    /// ```text
    ///  2---8---3
    ///  |`.     |
    ///  6  `5   7
    ///  |    `. |
    ///  0---4---1
    /// ```
    pub fn two_tri6() -> Mesh {
        let xy = [
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [0.5, 0.0],
            [0.5, 0.5],
            [0.0, 0.5],
            [1.0, 0.5],
            [0.5, 1.0],
        ];
        let nodes = nodes_at_rest(&xy, 1.0);
        Mesh {
            nodes,
            elements: vec![
                Element::region(0, GeoKind::Tri6, &[0, 1, 2, 4, 5, 6], 1),
                Element::region(1, GeoKind::Tri6, &[1, 3, 2, 7, 8, 5], 1),
            ],
        }
    }

    /// Returns one quadratic (serendipity) quadrilateral over [0,2]×[0,1] with its bottom edge
    ///
    /// ```text
    ///  3-----6-----2
    ///  7           5
    ///  0-----4-----1
    /// ```
    pub fn one_qua8(depth: f64) -> Mesh {
        let xy = [
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [0.0, 1.0],
            [1.0, 0.0],
            [2.0, 0.5],
            [1.0, 1.0],
            [0.0, 0.5],
        ];
        let nodes = nodes_at_rest(&xy, depth);
        Mesh {
            nodes,
            elements: vec![
                Element::region(0, GeoKind::Qua8, &[0, 1, 2, 3, 4, 5, 6, 7], 1),
                Element::boundary(1, GeoKind::Lin3, &[0, 1, 4], 1),
            ],
        }
    }
}

/// Allocates nodes with flat bed and the surface at `depth`
fn nodes_at_rest(xy: &[[f64; 2]], depth: f64) -> Vec<Node> {
    xy.iter()
        .enumerate()
        .map(|(id, p)| {
            let mut node = Node::new(id, p[0], p[1], 0.0);
            node.set_surface(depth);
            node
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
