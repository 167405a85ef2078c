// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

// Unit tests are in a separate module tree for readability.

mod digest_info;
mod hash;

pub(crate) static LEAF_PEM: &str = include_str!("fixtures/leaf.pem");
pub(crate) static ISSUER_PEM: &str = include_str!("fixtures/issuer.pem");
pub(crate) static NOT_ISSUER_PEM: &str = include_str!("fixtures/not_issuer.pem");

pub(crate) const LEAF_TBS: &str = concat!(
    "3082017f020900efdd78b156460b1b300d06092a864886f70d01010b05003053",
    "310b30090603550406130247423113301106035504080c0a536f6d652d537461",
    "746531123010060355040a0c0948616d697368204341311b301906035504030c",
    "1248616d697368204341204973737565722031301e170d313830333133313531",
    "3034335a170d3138303431323135313034335a304c310b300906035504061302",
    "47423113301106035504080c0a536f6d652d537461746531123010060355040a",
    "0c095465737420536974653114301206035504030c0b746573743132332e636f",
    "6d30819f300d06092a864886f70d010101050003818d0030818902818100bbba",
    "6982c5ea4a3b1a302f6cba457babfb9b14f4ebf76f6862aa23627b2c7878284b",
    "2ded9ad70bcb0ea24f79226c3fab8a0d178be19c98db21e51a70deee888dedc7",
    "6a7185b08cca070b4143dcbd40819c21e0ee50c49a829e5a07bc682c44e51b55",
    "fbb13e475ff4bb8b6040b98e138243a1bf7f7715bba99d65ae4f9b63604b0203",
    "010001",
);

// sha256 over the leaf's tbsCertificate
pub(crate) const LEAF_TBS_SHA256: &str =
    "cf678a1b9dcad0c52e6488080aeefbfe4da1daf0e292509e7722504777edd9e0";

pub(crate) const LEAF_SIGNATURE: &str = concat!(
    "0e771f146785ffcfe59495ca9c444730b4f43bcdbd73187649509eda4121405c",
    "05deb2ac5325b979d70151c4d6f4aa39c8863bb708018a8673586fcba23198bc",
    "fd8346355f41f982d1af8f2a220201213b67c63a24393678932fdd271c7130b3",
    "09e8427ca656bfd53bf3665c62cf2a8499978e286e4b8e9c9f4ade7d0ebcb93a",
);

// The leaf signature reversed with the issuer's key.
pub(crate) const LEAF_DIGEST_INFO: &str = concat!(
    "3031300d060960864801650304020105000420",
    "cf678a1b9dcad0c52e6488080aeefbfe4da1daf0e292509e7722504777edd9e0",
);
